use crate::application::dto::speakers::SpeakerDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::speaker::entity::SpeakerAlias;
use crate::domain::speaker::repository::SpeakerRepository;
use crate::domain::speaker::value_objects::SpeakerId;
use std::collections::HashMap;
use std::sync::Arc;

pub struct SpeakerQueryService {
    repository: Arc<dyn SpeakerRepository>,
}

impl SpeakerQueryService {
    pub fn new(repository: Arc<dyn SpeakerRepository>) -> Self {
        Self { repository }
    }

    /// All speakers ordered by name, each with its aliases attached.
    pub async fn list_speakers(&self) -> ApplicationResult<Vec<SpeakerDto>> {
        let speakers = self.repository.list().await?;
        let mut grouped: HashMap<SpeakerId, Vec<SpeakerAlias>> = HashMap::new();
        for alias in self.repository.list_aliases().await? {
            grouped.entry(alias.speaker_id).or_default().push(alias);
        }
        Ok(speakers
            .into_iter()
            .map(|speaker| {
                let aliases = grouped.remove(&speaker.id).unwrap_or_default();
                SpeakerDto::from_parts(speaker, aliases)
            })
            .collect())
    }

    pub async fn get_speaker(&self, id: i64) -> ApplicationResult<SpeakerDto> {
        let speaker_id = SpeakerId::new(id)?;
        let speaker = self
            .repository
            .find_by_id(speaker_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("speaker not found"))?;
        let aliases = self.repository.aliases_for(speaker_id).await?;
        Ok(SpeakerDto::from_parts(speaker, aliases))
    }
}
