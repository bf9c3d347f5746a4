pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewQuote, NewSource, Quote, QuoteUpdate, Source};
pub use repository::{QuoteReadRepository, QuoteRelationsRepository, QuoteWriteRepository};
pub use services::QuoteSlugService;
pub use value_objects::{
    QuoteId, QuoteSlug, QuoteStatus, QuoteText, QuoteType, SourceId, SourceType, SourceUrl,
};
