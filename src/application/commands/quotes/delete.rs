use crate::application::commands::quotes::service::QuoteCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::quote::value_objects::QuoteId;

#[derive(Debug, Clone)]
pub struct DeleteQuoteCommand {
    pub id: i64,
}

impl QuoteCommandService {
    /// Removes the quote row; attached sources and pivot rows go with it
    /// via the cascading foreign keys.
    pub async fn delete_quote(&self, command: DeleteQuoteCommand) -> ApplicationResult<()> {
        let id = QuoteId::new(command.id)?;
        self.read_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;
        self.write_repository.delete(id).await?;
        Ok(())
    }
}
