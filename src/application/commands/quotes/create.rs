use crate::application::commands::quotes::relations::SourceInput;
use crate::application::commands::quotes::service::{blank_to_none, QuoteCommandService};
use crate::application::dto::quotes::QuoteDto;
use crate::application::error::ApplicationResult;
use crate::domain::errors::DomainError;
use crate::domain::quote::entity::{NewQuote, Quote};
use crate::domain::quote::value_objects::{QuoteSlug, QuoteStatus, QuoteText, QuoteType};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct CreateQuoteCommand {
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
    pub async fn create_quote(&self, command: CreateQuoteCommand) -> ApplicationResult<QuoteDto> {
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
        let slug = self.slug_service.generate_unique_slug(&text, None).await?;

        let now = self.clock.now();
        let new_quote = NewQuote {
            text,
            speaker_id,
            slug,
            context: blank_to_none(command.context),
            location: blank_to_none(command.location),
            occurred_at: command.occurred_at,
            published_at: status.is_published().then_some(now),
            status,
            quote_type,
            quote_type_note: blank_to_none(command.quote_type_note),
            is_verified: command.is_verified,
            is_featured: command.is_featured,
            created_at: now,
            updated_at: now,
        };

        let created = self.insert_with_slug_fallback(new_quote).await?;
        self.sync_relations(created.id, command.tags, command.categories, command.sources)
            .await?;
        self.quote_dto(created).await
    }

    /// A unique violation on the insert means another writer landed the
    /// same slug inside the check window. Disambiguate with the current
    /// timestamp and retry exactly once; a second failure propagates.
    pub(super) async fn insert_with_slug_fallback(
        &self,
        new_quote: NewQuote,
    ) -> ApplicationResult<Quote> {
        match self.write_repository.insert(new_quote.clone()).await {
            Ok(quote) => Ok(quote),
            Err(DomainError::UniqueViolation(_)) => {
                let mut retry = new_quote;
                retry.slug = QuoteSlug::new(format!(
                    "{}-{}",
                    retry.slug.as_str(),
                    self.clock.now().timestamp()
                ))?;
                Ok(self.write_repository.insert(retry).await?)
            }
            Err(err) => Err(err.into()),
        }
    }
}
