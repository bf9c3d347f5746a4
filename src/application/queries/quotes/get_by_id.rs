use crate::application::dto::quotes::QuoteDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::queries::quotes::service::QuoteQueryService;
use crate::domain::quote::value_objects::QuoteId;

#[derive(Debug, Clone)]
pub struct GetQuoteQuery {
    pub id: i64,
}

impl QuoteQueryService {
    pub async fn get_quote(&self, query: GetQuoteQuery) -> ApplicationResult<QuoteDto> {
        let id = QuoteId::new(query.id)?;
        let quote = self
            .read_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;
        self.assemble(quote).await
    }
}
