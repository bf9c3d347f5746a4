use crate::domain::speaker::entity::{Speaker, SpeakerAlias};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub aliases: Vec<SpeakerAliasDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SpeakerDto {
    pub fn from_parts(speaker: Speaker, aliases: Vec<SpeakerAlias>) -> Self {
        Self {
            id: speaker.id.into(),
            name: speaker.name.into(),
            slug: speaker.slug.into(),
            description: speaker.description,
            aliases: aliases.into_iter().map(SpeakerAliasDto::from).collect(),
            created_at: speaker.created_at,
            updated_at: speaker.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerAliasDto {
    pub id: i64,
    pub speaker_id: i64,
    pub alias: String,
}

impl From<SpeakerAlias> for SpeakerAliasDto {
    fn from(alias: SpeakerAlias) -> Self {
        Self {
            id: alias.id.into(),
            speaker_id: alias.speaker_id.into(),
            alias: alias.alias.into(),
        }
    }
}

/// Compact speaker embed used inside quote payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerRefDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Speaker> for SpeakerRefDto {
    fn from(speaker: Speaker) -> Self {
        Self {
            id: speaker.id.into(),
            name: speaker.name.into(),
            slug: speaker.slug.into(),
        }
    }
}
