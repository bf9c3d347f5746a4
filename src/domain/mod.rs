pub mod errors;
pub mod quote;
pub mod services;
pub mod speaker;
pub mod taxonomy;
