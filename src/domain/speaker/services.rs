use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::SlugGenerator;
use crate::domain::speaker::entity::{NewSpeaker, Speaker};
use crate::domain::speaker::repository::SpeakerRepository;
use crate::domain::speaker::value_objects::{SpeakerId, SpeakerName, SpeakerSlug};
use chrono::Utc;
use std::sync::Arc;

/// Maps free-text speaker input to a canonical speaker id.
///
/// Resolution order:
/// 1. case-insensitive match on the primary name,
/// 2. case-insensitive match on a registered alias,
/// 3. create a new speaker carrying the input string verbatim.
///
/// The lookup-then-create window is racy on purpose: name uniqueness is
/// byte-exact, so when a concurrent writer lands the same name first, the
/// insert is rejected and the loser attaches to the winner's row.
pub struct SpeakerResolver {
    repository: Arc<dyn SpeakerRepository>,
    slug_generator: Arc<dyn SlugGenerator>,
}

impl SpeakerResolver {
    pub fn new(
        repository: Arc<dyn SpeakerRepository>,
        slug_generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            repository,
            slug_generator,
        }
    }

    pub async fn resolve(&self, speaker_name: Option<&str>) -> DomainResult<Option<SpeakerId>> {
        let Some(raw) = speaker_name else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        let name = SpeakerName::new(raw)?;
        let probe = name.normalized();

        if let Some(speaker) = self.repository.find_by_normalized_name(&probe).await? {
            return Ok(Some(speaker.id));
        }
        if let Some(speaker) = self.repository.find_by_normalized_alias(&probe).await? {
            return Ok(Some(speaker.id));
        }

        let created = self.create_speaker(name).await?;
        Ok(Some(created.id))
    }

    async fn create_speaker(&self, name: SpeakerName) -> DomainResult<Speaker> {
        let slug = self.unique_slug(&name).await?;
        let now = Utc::now();
        let new_speaker = NewSpeaker {
            name: name.clone(),
            slug,
            created_at: now,
            updated_at: now,
        };
        match self.repository.insert(new_speaker).await {
            Ok(speaker) => Ok(speaker),
            Err(DomainError::UniqueViolation(_)) => {
                // Lost the create race. The winner's row must exist under
                // the exact same name, so read it back and attach to it.
                self.repository
                    .find_by_exact_name(name.as_str())
                    .await?
                    .ok_or_else(|| {
                        DomainError::Persistence(format!(
                            "speaker '{name}' hit a unique conflict but no matching row exists"
                        ))
                    })
            }
            Err(err) => Err(err),
        }
    }

    async fn unique_slug(&self, name: &SpeakerName) -> DomainResult<SpeakerSlug> {
        let base = self.slug_generator.slugify(name.as_str());
        let base = if base.is_empty() {
            // Names with no sluggable characters still need a stable slug.
            format!("speaker-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;
        loop {
            let slug = SpeakerSlug::new(candidate.clone())?;
            if self.repository.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}
