pub mod get_by_id;
pub mod get_by_slug;
pub mod list;
pub mod service;

pub use get_by_id::GetQuoteQuery;
pub use get_by_slug::GetQuoteBySlugQuery;
pub use list::ListQuotesQuery;
pub use service::QuoteQueryService;
