use crate::domain::taxonomy::value_objects::{CategoryId, TagId, TagName, TagSlug};
use chrono::{DateTime, Utc};

/// Free-form label attached to quotes. Tags are created on the fly when a
/// quote references an unknown name.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub slug: TagSlug,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub slug: TagSlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Curated grouping. Categories are maintained out of band and only ever
/// referenced by id here.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
