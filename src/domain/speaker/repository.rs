use crate::domain::errors::DomainResult;
use crate::domain::speaker::entity::{NewSpeaker, NewSpeakerAlias, Speaker, SpeakerAlias};
use crate::domain::speaker::value_objects::{AliasId, SpeakerId, SpeakerSlug};
use async_trait::async_trait;

/// Storage access for speakers and their aliases.
///
/// Case folding rule: the `*_normalized_*` lookups receive a probe that
/// was folded with [`SpeakerName::normalized`] and must compare it against
/// the lower-cased stored value (`LOWER(name)` on the SQL side). Name
/// uniqueness itself stays byte-exact, so two casings of the same name can
/// coexist if they were inserted concurrently; the resolver converges on
/// whichever row the folded lookup returns.
///
/// [`SpeakerName::normalized`]: crate::domain::speaker::SpeakerName::normalized
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    async fn find_by_id(&self, id: SpeakerId) -> DomainResult<Option<Speaker>>;
    async fn find_by_ids(&self, ids: &[SpeakerId]) -> DomainResult<Vec<Speaker>>;
    /// Case-insensitive primary-name lookup; `name_lower` is pre-folded.
    async fn find_by_normalized_name(&self, name_lower: &str) -> DomainResult<Option<Speaker>>;
    /// Case-insensitive alias lookup returning the owning speaker.
    async fn find_by_normalized_alias(&self, alias_lower: &str) -> DomainResult<Option<Speaker>>;
    /// Byte-exact name lookup, used by the post-conflict recovery read.
    async fn find_by_exact_name(&self, name: &str) -> DomainResult<Option<Speaker>>;
    async fn find_by_slug(&self, slug: &SpeakerSlug) -> DomainResult<Option<Speaker>>;
    async fn insert(&self, new_speaker: NewSpeaker) -> DomainResult<Speaker>;
    async fn list(&self) -> DomainResult<Vec<Speaker>>;
    async fn add_alias(&self, new_alias: NewSpeakerAlias) -> DomainResult<SpeakerAlias>;
    async fn remove_alias(&self, speaker_id: SpeakerId, alias_id: AliasId) -> DomainResult<()>;
    async fn aliases_for(&self, speaker_id: SpeakerId) -> DomainResult<Vec<SpeakerAlias>>;
    async fn list_aliases(&self) -> DomainResult<Vec<SpeakerAlias>>;
}
