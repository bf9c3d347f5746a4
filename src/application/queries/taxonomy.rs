use crate::application::dto::taxonomy::{CategoryDto, TagDto};
use crate::application::error::ApplicationResult;
use crate::domain::taxonomy::repository::{CategoryRepository, TagRepository};
use std::sync::Arc;

pub struct TaxonomyQueryService {
    tag_repository: Arc<dyn TagRepository>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl TaxonomyQueryService {
    pub fn new(
        tag_repository: Arc<dyn TagRepository>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            tag_repository,
            category_repository,
        }
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tag_repository.list().await?;
        Ok(tags.into_iter().map(TagDto::from).collect())
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.category_repository.list().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
