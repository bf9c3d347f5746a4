use crate::application::dto::quotes::QuoteDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::queries::quotes::service::QuoteQueryService;
use crate::domain::quote::value_objects::QuoteSlug;

#[derive(Debug, Clone)]
pub struct GetQuoteBySlugQuery {
    pub slug: String,
}

impl QuoteQueryService {
    pub async fn get_quote_by_slug(&self, query: GetQuoteBySlugQuery) -> ApplicationResult<QuoteDto> {
        let slug = QuoteSlug::new(query.slug)?;
        let quote = self
            .read_repository
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;
        self.assemble(quote).await
    }
}
