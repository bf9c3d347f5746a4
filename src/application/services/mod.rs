use crate::application::commands::quotes::QuoteCommandService;
use crate::application::commands::speakers::SpeakerCommandService;
use crate::application::ports::time::Clock;
use crate::application::queries::quotes::QuoteQueryService;
use crate::application::queries::speakers::SpeakerQueryService;
use crate::application::queries::taxonomy::TaxonomyQueryService;
use crate::domain::quote::repository::{
    QuoteReadRepository, QuoteRelationsRepository, QuoteWriteRepository,
};
use crate::domain::quote::services::QuoteSlugService;
use crate::domain::services::SlugGenerator;
use crate::domain::speaker::repository::SpeakerRepository;
use crate::domain::speaker::services::SpeakerResolver;
use crate::domain::taxonomy::repository::{CategoryRepository, TagRepository};
use std::sync::Arc;

/// Bundle of all application services, wired once at startup and shared
/// behind the HTTP state.
pub struct ApplicationServices {
    pub quote_commands: QuoteCommandService,
    pub speaker_commands: SpeakerCommandService,
    pub quote_queries: QuoteQueryService,
    pub speaker_queries: SpeakerQueryService,
    pub taxonomy_queries: TaxonomyQueryService,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        quote_write_repository: Arc<dyn QuoteWriteRepository>,
        quote_read_repository: Arc<dyn QuoteReadRepository>,
        quote_relations_repository: Arc<dyn QuoteRelationsRepository>,
        speaker_repository: Arc<dyn SpeakerRepository>,
        tag_repository: Arc<dyn TagRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        slug_generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let speaker_resolver = Arc::new(SpeakerResolver::new(
            Arc::clone(&speaker_repository),
            Arc::clone(&slug_generator),
        ));
        let slug_service = Arc::new(QuoteSlugService::new(
            Arc::clone(&quote_read_repository),
            Arc::clone(&slug_generator),
        ));

        Self {
            quote_commands: QuoteCommandService::new(
                quote_write_repository,
                Arc::clone(&quote_read_repository),
                Arc::clone(&quote_relations_repository),
                Arc::clone(&tag_repository),
                Arc::clone(&speaker_repository),
                speaker_resolver,
                slug_service,
                slug_generator,
                Arc::clone(&clock),
            ),
            speaker_commands: SpeakerCommandService::new(Arc::clone(&speaker_repository), clock),
            quote_queries: QuoteQueryService::new(
                quote_read_repository,
                quote_relations_repository,
                Arc::clone(&speaker_repository),
            ),
            speaker_queries: SpeakerQueryService::new(speaker_repository),
            taxonomy_queries: TaxonomyQueryService::new(tag_repository, category_repository),
        }
    }
}
