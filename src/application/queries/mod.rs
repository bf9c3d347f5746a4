pub mod quotes;
pub mod speakers;
pub mod taxonomy;
