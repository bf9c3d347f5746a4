use crate::domain::speaker::value_objects::{
    AliasId, AliasName, SpeakerId, SpeakerName, SpeakerSlug,
};
use chrono::{DateTime, Utc};

/// A canonical identity that quotes are attributed to. The `name` keeps
/// the exact string it was first created with; lookups fold case instead
/// of rewriting the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct Speaker {
    pub id: SpeakerId,
    pub name: SpeakerName,
    pub slug: SpeakerSlug,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSpeaker {
    pub name: SpeakerName,
    pub slug: SpeakerSlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An alternate spelling that resolves to an existing speaker. Aliases
/// are deliberately not unique across speakers; the ambiguity is resolved
/// by whichever row the lookup returns first.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerAlias {
    pub id: AliasId,
    pub speaker_id: SpeakerId,
    pub alias: AliasName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSpeakerAlias {
    pub speaker_id: SpeakerId,
    pub alias: AliasName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
