use crate::application::commands::quotes::relations::SourceInput;
use crate::application::commands::quotes::service::{blank_to_none, QuoteCommandService};
use crate::application::dto::quotes::QuoteDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::DomainError;
use crate::domain::quote::entity::{Quote, QuoteUpdate};
use crate::domain::quote::value_objects::{QuoteId, QuoteSlug, QuoteStatus, QuoteText, QuoteType};
use chrono::NaiveDate;

/// Full-state replacement; omitted optional fields clear their columns.
#[derive(Debug, Clone)]
pub struct UpdateQuoteCommand {
    pub id: i64,
    pub text: String,
    pub speaker: Option<String>,
    pub context: Option<String>,
    pub location: Option<String>,
    pub occurred_at: Option<NaiveDate>,
    pub status: String,
    pub quote_type: Option<String>,
    pub quote_type_note: Option<String>,
    pub is_verified: bool,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub categories: Vec<i64>,
    pub sources: Vec<SourceInput>,
}

impl QuoteCommandService {
    pub async fn update_quote(&self, command: UpdateQuoteCommand) -> ApplicationResult<QuoteDto> {
        let id = QuoteId::new(command.id)?;
        let mut quote = self
            .read_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;

        let text = QuoteText::new(command.text)?;
        let status: QuoteStatus = command.status.parse()?;
        let quote_type = command
            .quote_type
            .as_deref()
            .map(str::parse::<QuoteType>)
            .transpose()?;

        let speaker_id = self
            .speaker_resolver
            .resolve(command.speaker.as_deref())
            .await?;

        // Unchanged text keeps the stored slug; edited text gets a fresh
        // one, ignoring this quote's own row during the collision probe.
        let slug = if text == quote.text {
            quote.slug.clone()
        } else {
            self.slug_service
                .generate_unique_slug(&text, Some(id))
                .await?
        };

        let now = self.clock.now();
        quote.apply_status(status, now);

        let update = QuoteUpdate {
            id,
            text,
            speaker_id,
            slug,
            context: blank_to_none(command.context),
            location: blank_to_none(command.location),
            occurred_at: command.occurred_at,
            published_at: quote.published_at,
            status: quote.status,
            quote_type,
            quote_type_note: blank_to_none(command.quote_type_note),
            is_verified: command.is_verified,
            is_featured: command.is_featured,
            updated_at: quote.updated_at,
        };

        let updated = self.update_with_slug_fallback(update).await?;
        self.sync_relations(updated.id, command.tags, command.categories, command.sources)
            .await?;
        self.quote_dto(updated).await
    }

    /// Same one-shot retry as the insert path.
    async fn update_with_slug_fallback(&self, update: QuoteUpdate) -> ApplicationResult<Quote> {
        match self.write_repository.update(update.clone()).await {
            Ok(quote) => Ok(quote),
            Err(DomainError::UniqueViolation(_)) => {
                let mut retry = update;
                retry.slug = QuoteSlug::new(format!(
                    "{}-{}",
                    retry.slug.as_str(),
                    self.clock.now().timestamp()
                ))?;
                Ok(self.write_repository.update(retry).await?)
            }
            Err(err) => Err(err.into()),
        }
    }
}
