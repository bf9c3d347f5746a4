use crate::application::dto::speakers::SpeakerRefDto;
use crate::application::dto::taxonomy::{CategoryDto, TagDto};
use crate::domain::quote::entity::{Quote, Source};
use crate::domain::speaker::entity::Speaker;
use crate::domain::taxonomy::entity::{Category, Tag};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDto {
    pub id: i64,
    pub text: String,
    pub slug: String,
    pub speaker: Option<SpeakerRefDto>,
    pub context: Option<String>,
    pub location: Option<String>,
    pub occurred_at: Option<NaiveDate>,
    pub published_at: Option<DateTime<Utc>>,
    pub status: String,
    pub quote_type: Option<String>,
    pub quote_type_note: Option<String>,
    pub is_verified: bool,
    pub is_featured: bool,
    pub view_count: i32,
    pub tags: Vec<TagDto>,
    pub categories: Vec<CategoryDto>,
    pub sources: Vec<SourceDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuoteDto {
    pub fn from_parts(
        quote: Quote,
        speaker: Option<Speaker>,
        tags: Vec<Tag>,
        categories: Vec<Category>,
        sources: Vec<Source>,
    ) -> Self {
        Self {
            id: quote.id.into(),
            text: quote.text.into(),
            slug: quote.slug.into(),
            speaker: speaker.map(SpeakerRefDto::from),
            context: quote.context,
            location: quote.location,
            occurred_at: quote.occurred_at,
            published_at: quote.published_at,
            status: quote.status.as_str().to_string(),
            quote_type: quote.quote_type.map(|t| t.as_str().to_string()),
            quote_type_note: quote.quote_type_note,
            is_verified: quote.is_verified,
            is_featured: quote.is_featured,
            view_count: quote.view_count,
            tags: tags.into_iter().map(TagDto::from).collect(),
            categories: categories.into_iter().map(CategoryDto::from).collect(),
            sources: sources.into_iter().map(SourceDto::from).collect(),
            created_at: quote.created_at,
            updated_at: quote.updated_at,
        }
    }
}

/// Trimmed row for listings; relations are omitted except the speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteListItemDto {
    pub id: i64,
    pub text: String,
    pub slug: String,
    pub speaker: Option<SpeakerRefDto>,
    pub status: String,
    pub quote_type: Option<String>,
    pub is_verified: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl QuoteListItemDto {
    pub fn from_parts(quote: Quote, speaker: Option<Speaker>) -> Self {
        Self {
            id: quote.id.into(),
            text: quote.text.into(),
            slug: quote.slug.into(),
            speaker: speaker.map(SpeakerRefDto::from),
            status: quote.status.as_str().to_string(),
            quote_type: quote.quote_type.map(|t| t.as_str().to_string()),
            is_verified: quote.is_verified,
            is_featured: quote.is_featured,
            created_at: quote.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDto {
    pub id: i64,
    pub quote_id: i64,
    pub url: String,
    pub title: Option<String>,
    pub source_type: Option<String>,
    pub is_primary: bool,
    pub archived_url: Option<String>,
}

impl From<Source> for SourceDto {
    fn from(source: Source) -> Self {
        Self {
            id: source.id.into(),
            quote_id: source.quote_id.into(),
            url: source.url.into(),
            title: source.title,
            source_type: source.source_type.map(|t| t.as_str().to_string()),
            is_primary: source.is_primary,
            archived_url: source.archived_url.map(String::from),
        }
    }
}
