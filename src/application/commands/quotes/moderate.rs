use crate::application::commands::quotes::service::QuoteCommandService;
use crate::application::dto::quotes::QuoteDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::quote::value_objects::QuoteId;

#[derive(Debug, Clone)]
pub struct ToggleVerifiedCommand {
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct ToggleFeaturedCommand {
    pub id: i64,
}

impl QuoteCommandService {
    pub async fn toggle_verified(
        &self,
        command: ToggleVerifiedCommand,
    ) -> ApplicationResult<QuoteDto> {
        let id = QuoteId::new(command.id)?;
        let quote = self
            .read_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;
        let updated = self
            .write_repository
            .set_verified(id, !quote.is_verified, self.clock.now())
            .await?;
        self.quote_dto(updated).await
    }

    pub async fn toggle_featured(
        &self,
        command: ToggleFeaturedCommand,
    ) -> ApplicationResult<QuoteDto> {
        let id = QuoteId::new(command.id)?;
        let quote = self
            .read_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;
        let updated = self
            .write_repository
            .set_featured(id, !quote.is_featured, self.clock.now())
            .await?;
        self.quote_dto(updated).await
    }
}
