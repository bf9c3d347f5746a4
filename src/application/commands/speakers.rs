use crate::application::dto::speakers::SpeakerAliasDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::speaker::entity::NewSpeakerAlias;
use crate::domain::speaker::repository::SpeakerRepository;
use crate::domain::speaker::value_objects::{AliasId, AliasName, SpeakerId};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AddSpeakerAliasCommand {
    pub speaker_id: i64,
    pub alias: String,
}

#[derive(Debug, Clone)]
pub struct RemoveSpeakerAliasCommand {
    pub speaker_id: i64,
    pub alias_id: i64,
}

/// Alias management for speakers. Speakers themselves are created by the
/// resolver as a side effect of quote writes, so there is no create
/// command here.
pub struct SpeakerCommandService {
    repository: Arc<dyn SpeakerRepository>,
    clock: Arc<dyn Clock>,
}

impl SpeakerCommandService {
    pub fn new(repository: Arc<dyn SpeakerRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn add_alias(
        &self,
        command: AddSpeakerAliasCommand,
    ) -> ApplicationResult<SpeakerAliasDto> {
        let speaker_id = SpeakerId::new(command.speaker_id)?;
        self.repository
            .find_by_id(speaker_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("speaker not found"))?;

        let alias = AliasName::new(command.alias)?;
        let now = self.clock.now();
        let created = self
            .repository
            .add_alias(NewSpeakerAlias {
                speaker_id,
                alias,
                created_at: now,
                updated_at: now,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn remove_alias(&self, command: RemoveSpeakerAliasCommand) -> ApplicationResult<()> {
        let speaker_id = SpeakerId::new(command.speaker_id)?;
        let alias_id = AliasId::new(command.alias_id)?;
        self.repository.remove_alias(speaker_id, alias_id).await?;
        Ok(())
    }
}
