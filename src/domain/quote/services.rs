use crate::domain::errors::DomainResult;
use crate::domain::quote::repository::QuoteReadRepository;
use crate::domain::quote::value_objects::{QuoteId, QuoteSlug, QuoteText};
use crate::domain::services::SlugGenerator;
use chrono::Utc;
use std::sync::Arc;

/// Quote text longer than this many whitespace-separated words is cut
/// before slugging, so slugs stay readable for long quotes.
const SLUG_WORD_LIMIT: usize = 8;

/// Derives a unique slug for a quote from its text.
///
/// Candidates are probed in order: the base slug, then `base-1`, `base-2`
/// and so on until a free one is found. When `ignore_id` is set, a
/// candidate owned by that quote counts as free, so regenerating the slug
/// of an unchanged text yields the quote's current slug.
pub struct QuoteSlugService {
    repository: Arc<dyn QuoteReadRepository>,
    slug_generator: Arc<dyn SlugGenerator>,
}

impl QuoteSlugService {
    pub fn new(
        repository: Arc<dyn QuoteReadRepository>,
        slug_generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            repository,
            slug_generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        text: &QuoteText,
        ignore_id: Option<QuoteId>,
    ) -> DomainResult<QuoteSlug> {
        let base = self
            .slug_generator
            .slugify(&truncate_words(text.as_str(), SLUG_WORD_LIMIT));
        let base = if base.is_empty() {
            // Text made of emoji or punctuation only still needs a slug.
            format!("quote-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;
        loop {
            let slug = QuoteSlug::new(candidate.clone())?;
            match self.repository.find_by_slug(&slug).await? {
                None => return Ok(slug),
                Some(existing) if ignore_id == Some(existing.id) => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
            }
        }
    }
}

fn truncate_words(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
