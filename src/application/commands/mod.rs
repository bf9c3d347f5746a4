pub mod quotes;
pub mod speakers;
