use crate::application::dto::quotes::QuoteDto;
use crate::application::error::ApplicationResult;
use crate::application::ports::time::Clock;
use crate::domain::quote::entity::Quote;
use crate::domain::quote::repository::{
    QuoteReadRepository, QuoteRelationsRepository, QuoteWriteRepository,
};
use crate::domain::quote::services::QuoteSlugService;
use crate::domain::services::SlugGenerator;
use crate::domain::speaker::repository::SpeakerRepository;
use crate::domain::speaker::services::SpeakerResolver;
use crate::domain::taxonomy::repository::TagRepository;
use std::sync::Arc;

/// Write-side entry point for quotes. Speaker attribution goes through
/// the resolver, slugs through the slug service; relation syncs always
/// run after the quote row itself is persisted.
pub struct QuoteCommandService {
    pub(super) write_repository: Arc<dyn QuoteWriteRepository>,
    pub(super) read_repository: Arc<dyn QuoteReadRepository>,
    pub(super) relations_repository: Arc<dyn QuoteRelationsRepository>,
    pub(super) tag_repository: Arc<dyn TagRepository>,
    pub(super) speaker_repository: Arc<dyn SpeakerRepository>,
    pub(super) speaker_resolver: Arc<SpeakerResolver>,
    pub(super) slug_service: Arc<QuoteSlugService>,
    pub(super) slug_generator: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl QuoteCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repository: Arc<dyn QuoteWriteRepository>,
        read_repository: Arc<dyn QuoteReadRepository>,
        relations_repository: Arc<dyn QuoteRelationsRepository>,
        tag_repository: Arc<dyn TagRepository>,
        speaker_repository: Arc<dyn SpeakerRepository>,
        speaker_resolver: Arc<SpeakerResolver>,
        slug_service: Arc<QuoteSlugService>,
        slug_generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repository,
            read_repository,
            relations_repository,
            tag_repository,
            speaker_repository,
            speaker_resolver,
            slug_service,
            slug_generator,
            clock,
        }
    }

    pub(super) async fn quote_dto(&self, quote: Quote) -> ApplicationResult<QuoteDto> {
        let speaker = match quote.speaker_id {
            Some(id) => self.speaker_repository.find_by_id(id).await?,
            None => None,
        };
        let tags = self.relations_repository.tags_for(quote.id).await?;
        let categories = self.relations_repository.categories_for(quote.id).await?;
        let sources = self.relations_repository.sources_for(quote.id).await?;
        Ok(QuoteDto::from_parts(quote, speaker, tags, categories, sources))
    }
}

/// Optional text fields arrive from forms as empty strings; store NULL
/// instead.
pub(super) fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
