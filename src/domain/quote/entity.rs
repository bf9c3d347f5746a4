use crate::domain::quote::value_objects::{
    QuoteId, QuoteSlug, QuoteStatus, QuoteText, QuoteType, SourceId, SourceType, SourceUrl,
};
use crate::domain::speaker::value_objects::SpeakerId;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: QuoteId,
    pub text: QuoteText,
    pub speaker_id: Option<SpeakerId>,
    pub slug: QuoteSlug,
    pub context: Option<String>,
    pub location: Option<String>,
    pub occurred_at: Option<NaiveDate>,
    pub published_at: Option<DateTime<Utc>>,
    pub status: QuoteStatus,
    pub quote_type: Option<QuoteType>,
    pub quote_type_note: Option<String>,
    pub is_verified: bool,
    pub is_featured: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    /// Applies a status change. The publication timestamp is written once,
    /// on the first transition into `Published`, and never cleared, so the
    /// original publication date survives unpublish/republish cycles.
    pub fn apply_status(&mut self, status: QuoteStatus, now: DateTime<Utc>) {
        self.status = status;
        if self.status.is_published() && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewQuote {
    pub text: QuoteText,
    pub speaker_id: Option<SpeakerId>,
    pub slug: QuoteSlug,
    pub context: Option<String>,
    pub location: Option<String>,
    pub occurred_at: Option<NaiveDate>,
    pub published_at: Option<DateTime<Utc>>,
    pub status: QuoteStatus,
    pub quote_type: Option<QuoteType>,
    pub quote_type_note: Option<String>,
    pub is_verified: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement state for an existing quote. Every field is written;
/// callers carry over values they want to keep.
#[derive(Debug, Clone)]
pub struct QuoteUpdate {
    pub id: QuoteId,
    pub text: QuoteText,
    pub speaker_id: Option<SpeakerId>,
    pub slug: QuoteSlug,
    pub context: Option<String>,
    pub location: Option<String>,
    pub occurred_at: Option<NaiveDate>,
    pub published_at: Option<DateTime<Utc>>,
    pub status: QuoteStatus,
    pub quote_type: Option<QuoteType>,
    pub quote_type_note: Option<String>,
    pub is_verified: bool,
    pub is_featured: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub id: SourceId,
    pub quote_id: QuoteId,
    pub url: SourceUrl,
    pub title: Option<String>,
    pub source_type: Option<SourceType>,
    pub is_primary: bool,
    pub archived_url: Option<SourceUrl>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSource {
    pub url: SourceUrl,
    pub title: Option<String>,
    pub source_type: Option<SourceType>,
    pub is_primary: bool,
    pub archived_url: Option<SourceUrl>,
}
