use crate::application::dto::quotes::QuoteListItemDto;
use crate::application::error::ApplicationResult;
use crate::application::queries::quotes::service::QuoteQueryService;
use crate::domain::speaker::value_objects::SpeakerId;
use std::collections::HashMap;

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct ListQuotesQuery {
    pub limit: Option<u32>,
}

impl QuoteQueryService {
    /// Newest quotes first. Speakers are fetched in one batch instead of
    /// per row.
    pub async fn list_quotes(
        &self,
        query: ListQuotesQuery,
    ) -> ApplicationResult<Vec<QuoteListItemDto>> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let quotes = self.read_repository.list_recent(limit).await?;

        let mut speaker_ids: Vec<SpeakerId> =
            quotes.iter().filter_map(|quote| quote.speaker_id).collect();
        speaker_ids.sort_by_key(|id| id.0);
        speaker_ids.dedup();

        let speakers: HashMap<SpeakerId, _> = self
            .speaker_repository
            .find_by_ids(&speaker_ids)
            .await?
            .into_iter()
            .map(|speaker| (speaker.id, speaker))
            .collect();

        Ok(quotes
            .into_iter()
            .map(|quote| {
                let speaker = quote
                    .speaker_id
                    .and_then(|id| speakers.get(&id))
                    .cloned();
                QuoteListItemDto::from_parts(quote, speaker)
            })
            .collect())
    }
}
