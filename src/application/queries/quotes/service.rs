use crate::application::dto::quotes::QuoteDto;
use crate::application::error::ApplicationResult;
use crate::domain::quote::entity::Quote;
use crate::domain::quote::repository::{QuoteReadRepository, QuoteRelationsRepository};
use crate::domain::speaker::repository::SpeakerRepository;
use std::sync::Arc;

pub struct QuoteQueryService {
    pub(super) read_repository: Arc<dyn QuoteReadRepository>,
    pub(super) relations_repository: Arc<dyn QuoteRelationsRepository>,
    pub(super) speaker_repository: Arc<dyn SpeakerRepository>,
}

impl QuoteQueryService {
    pub fn new(
        read_repository: Arc<dyn QuoteReadRepository>,
        relations_repository: Arc<dyn QuoteRelationsRepository>,
        speaker_repository: Arc<dyn SpeakerRepository>,
    ) -> Self {
        Self {
            read_repository,
            relations_repository,
            speaker_repository,
        }
    }

    pub(super) async fn assemble(&self, quote: Quote) -> ApplicationResult<QuoteDto> {
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
