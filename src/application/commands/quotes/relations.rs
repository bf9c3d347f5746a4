use crate::application::commands::quotes::service::{blank_to_none, QuoteCommandService};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::quote::entity::NewSource;
use crate::domain::quote::value_objects::{QuoteId, SourceType, SourceUrl};
use crate::domain::taxonomy::entity::NewTag;
use crate::domain::taxonomy::value_objects::{CategoryId, TagId, TagName, TagSlug};

#[derive(Debug, Clone)]
pub struct SourceInput {
    pub url: String,
    pub title: Option<String>,
    pub source_type: Option<String>,
    pub is_primary: bool,
    pub archived_url: Option<String>,
}

impl QuoteCommandService {
    /// Overwrites the quote's tag, category and source attachments.
    ///
    /// Tags may arrive as numeric ids or as names. Ids that resolve to
    /// nothing are dropped; unknown names create a tag on the fly.
    /// Categories are ids onto existing rows.
    pub(super) async fn sync_relations(
        &self,
        quote_id: QuoteId,
        tags: Vec<String>,
        categories: Vec<i64>,
        sources: Vec<SourceInput>,
    ) -> ApplicationResult<()> {
        let mut tag_ids = Vec::with_capacity(tags.len());
        for entry in tags {
            if let Some(tag_id) = self.resolve_tag(entry).await? {
                tag_ids.push(tag_id);
            }
        }
        self.relations_repository
            .set_tags(quote_id, &tag_ids)
            .await?;

        let mut category_ids = Vec::with_capacity(categories.len());
        for id in categories {
            category_ids.push(CategoryId::new(id)?);
        }
        self.relations_repository
            .set_categories(quote_id, &category_ids, self.clock.now())
            .await?;

        let mut new_sources = Vec::with_capacity(sources.len());
        for input in sources {
            new_sources.push(to_new_source(input)?);
        }
        self.relations_repository
            .replace_sources(quote_id, new_sources, self.clock.now())
            .await?;
        Ok(())
    }

    async fn resolve_tag(&self, entry: String) -> ApplicationResult<Option<TagId>> {
        if let Ok(id) = entry.parse::<i64>() {
            let found = match TagId::new(id) {
                Ok(tag_id) => self.tag_repository.find_by_id(tag_id).await?,
                Err(_) => None,
            };
            return Ok(found.map(|tag| tag.id));
        }
        let name = TagName::new(entry)?;
        if let Some(tag) = self.tag_repository.find_by_name(name.as_str()).await? {
            return Ok(Some(tag.id));
        }
        self.create_tag(name).await.map(Some)
    }

    async fn create_tag(&self, name: TagName) -> ApplicationResult<TagId> {
        let slug = self.unique_tag_slug(&name).await?;
        let now = self.clock.now();
        let new_tag = NewTag {
            name: name.clone(),
            slug,
            created_at: now,
            updated_at: now,
        };
        match self.tag_repository.insert(new_tag).await {
            Ok(tag) => Ok(tag.id),
            Err(DomainError::UniqueViolation(_)) => {
                // Find-or-create race: attach to whichever row the
                // concurrent writer committed first.
                self.tag_repository
                    .find_by_name(name.as_str())
                    .await?
                    .map(|tag| tag.id)
                    .ok_or_else(|| {
                        ApplicationError::infrastructure(format!(
                            "tag '{name}' hit a unique conflict but no matching row exists"
                        ))
                    })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn unique_tag_slug(&self, name: &TagName) -> ApplicationResult<TagSlug> {
        let base = self.slug_generator.slugify(name.as_str());
        let base = if base.is_empty() {
            format!("tag-{}", self.clock.now().timestamp())
        } else {
            base
        };
        let mut candidate = base.clone();
        let mut counter = 1u64;
        loop {
            let slug = TagSlug::new(candidate.clone())?;
            if self.tag_repository.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}

fn to_new_source(input: SourceInput) -> DomainResult<NewSource> {
    Ok(NewSource {
        url: SourceUrl::new(input.url)?,
        title: blank_to_none(input.title),
        source_type: input
            .source_type
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::parse::<SourceType>)
            .transpose()?,
        is_primary: input.is_primary,
        archived_url: blank_to_none(input.archived_url)
            .map(SourceUrl::new)
            .transpose()?,
    })
}
