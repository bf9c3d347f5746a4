// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use verbatim_core::domain::quote::entity::Quote;
use verbatim_core::domain::quote::value_objects::{QuoteId, QuoteSlug, QuoteStatus, QuoteText};
use verbatim_core::domain::speaker::entity::{Speaker, SpeakerAlias};
use verbatim_core::domain::speaker::value_objects::{
    AliasId, AliasName, SpeakerId, SpeakerName, SpeakerSlug,
};
use verbatim_core::domain::taxonomy::entity::{Category, Tag};
use verbatim_core::domain::taxonomy::value_objects::{CategoryId, TagId, TagName, TagSlug};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub struct SpeakerBuilder {
    id: i64,
    name: String,
    slug: String,
}

impl SpeakerBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Test Speaker".into(),
            slug: "test-speaker".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn build(self) -> Speaker {
        Speaker {
            id: SpeakerId::new(self.id).unwrap(),
            name: SpeakerName::new(self.name).unwrap(),
            slug: SpeakerSlug::new(self.slug).unwrap(),
            description: None,
            created_at: base_time(),
            updated_at: base_time(),
        }
    }
}

pub fn alias(id: i64, speaker_id: i64, name: &str) -> SpeakerAlias {
    SpeakerAlias {
        id: AliasId::new(id).unwrap(),
        speaker_id: SpeakerId::new(speaker_id).unwrap(),
        alias: AliasName::new(name).unwrap(),
        created_at: base_time(),
        updated_at: base_time(),
    }
}

pub struct QuoteBuilder {
    id: i64,
    text: String,
    slug: String,
    speaker_id: Option<i64>,
    status: QuoteStatus,
    created_at: DateTime<Utc>,
}

impl QuoteBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            text: "Test quote body".into(),
            slug: "test-quote-body".into(),
            speaker_id: None,
            status: QuoteStatus::Draft,
            created_at: base_time(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn speaker(mut self, speaker_id: i64) -> Self {
        self.speaker_id = Some(speaker_id);
        self
    }

    pub fn status(mut self, status: QuoteStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Quote {
        let published = self.status.is_published();
        Quote {
            id: QuoteId::new(self.id).unwrap(),
            text: QuoteText::new(self.text).unwrap(),
            speaker_id: self.speaker_id.map(|id| SpeakerId::new(id).unwrap()),
            slug: QuoteSlug::new(self.slug).unwrap(),
            context: None,
            location: None,
            occurred_at: None,
            published_at: published.then_some(self.created_at),
            status: self.status,
            quote_type: None,
            quote_type_note: None,
            is_verified: false,
            is_featured: false,
            view_count: 0,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub fn tag(id: i64, name: &str, slug: &str) -> Tag {
    Tag {
        id: TagId::new(id).unwrap(),
        name: TagName::new(name).unwrap(),
        slug: TagSlug::new(slug).unwrap(),
        description: None,
        created_at: base_time(),
        updated_at: base_time(),
    }
}

pub fn category(id: i64, name: &str, slug: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: name.into(),
        slug: slug.into(),
        description: None,
        color: None,
        created_at: base_time(),
        updated_at: base_time(),
    }
}
