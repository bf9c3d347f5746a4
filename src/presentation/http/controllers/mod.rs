// src/presentation/http/controllers/mod.rs
pub mod quotes;
pub mod speakers;
pub mod taxonomy;
