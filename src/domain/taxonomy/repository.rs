use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::entity::{Category, NewTag, Tag};
use crate::domain::taxonomy::value_objects::{CategoryId, TagId, TagSlug};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    /// Byte-exact name lookup; tag names are stored and matched verbatim.
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Tag>>;
    async fn find_by_slug(&self, slug: &TagSlug) -> DomainResult<Option<Tag>>;
    async fn insert(&self, new_tag: NewTag) -> DomainResult<Tag>;
    async fn list(&self) -> DomainResult<Vec<Tag>>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
