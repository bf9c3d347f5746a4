// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_quote;
mod postgres_speaker;
mod postgres_taxonomy;

pub(crate) use error::map_sqlx;
pub use postgres_quote::{
    PostgresQuoteReadRepository, PostgresQuoteRelationsRepository, PostgresQuoteWriteRepository,
};
pub use postgres_speaker::PostgresSpeakerRepository;
pub use postgres_taxonomy::{PostgresCategoryRepository, PostgresTagRepository};
