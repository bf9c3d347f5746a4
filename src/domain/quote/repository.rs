use crate::domain::errors::DomainResult;
use crate::domain::quote::entity::{NewQuote, NewSource, Quote, QuoteUpdate, Source};
use crate::domain::quote::value_objects::{QuoteId, QuoteSlug};
use crate::domain::taxonomy::entity::{Category, Tag};
use crate::domain::taxonomy::value_objects::{CategoryId, TagId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait QuoteWriteRepository: Send + Sync {
    async fn insert(&self, new_quote: NewQuote) -> DomainResult<Quote>;
    async fn update(&self, update: QuoteUpdate) -> DomainResult<Quote>;
    async fn delete(&self, id: QuoteId) -> DomainResult<()>;
    async fn set_verified(
        &self,
        id: QuoteId,
        verified: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<Quote>;
    async fn set_featured(
        &self,
        id: QuoteId,
        featured: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<Quote>;
}

#[async_trait]
pub trait QuoteReadRepository: Send + Sync {
    async fn find_by_id(&self, id: QuoteId) -> DomainResult<Option<Quote>>;
    async fn find_by_slug(&self, slug: &QuoteSlug) -> DomainResult<Option<Quote>>;
    /// Newest first, capped at `limit`.
    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Quote>>;
}

/// Attached taxonomy and evidence rows for a quote. All `set_*` and
/// `replace_*` calls overwrite the full attachment set.
#[async_trait]
pub trait QuoteRelationsRepository: Send + Sync {
    async fn set_tags(&self, quote_id: QuoteId, tag_ids: &[TagId]) -> DomainResult<()>;
    async fn set_categories(
        &self,
        quote_id: QuoteId,
        category_ids: &[CategoryId],
        now: DateTime<Utc>,
    ) -> DomainResult<()>;
    async fn replace_sources(
        &self,
        quote_id: QuoteId,
        sources: Vec<NewSource>,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Source>>;
    async fn tags_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Tag>>;
    async fn categories_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Category>>;
    async fn sources_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Source>>;
}
