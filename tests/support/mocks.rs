// tests/support/mocks.rs
//
// In-memory repository doubles backing the integration tests. One store
// implements every repository trait over a single Mutex-guarded state, so
// cross-aggregate flows (quote -> speaker -> tags) see one consistent
// dataset. Fault injection hooks simulate the concurrent writer that the
// unique-violation recovery paths exist for.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use verbatim_core::application::ports::time::Clock;
use verbatim_core::domain::errors::{DomainError, DomainResult};
use verbatim_core::domain::quote::entity::{NewQuote, NewSource, Quote, QuoteUpdate, Source};
use verbatim_core::domain::quote::repository::{
    QuoteReadRepository, QuoteRelationsRepository, QuoteWriteRepository,
};
use verbatim_core::domain::quote::value_objects::{QuoteId, QuoteSlug, SourceId};
use verbatim_core::domain::speaker::entity::{NewSpeaker, NewSpeakerAlias, Speaker, SpeakerAlias};
use verbatim_core::domain::speaker::repository::SpeakerRepository;
use verbatim_core::domain::speaker::value_objects::{AliasId, SpeakerId, SpeakerSlug};
use verbatim_core::domain::taxonomy::entity::{Category, NewTag, Tag};
use verbatim_core::domain::taxonomy::repository::{CategoryRepository, TagRepository};
use verbatim_core::domain::taxonomy::value_objects::{CategoryId, TagId, TagSlug};

/* -------------------------------- Clock -------------------------------- */

/// Clock pinned to a settable instant.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/* ------------------------------ InMemoryDb ------------------------------ */

/// What the next speaker insert should do instead of succeeding.
enum SpeakerInsertFault {
    /// Commit the row as a concurrent winner would, then report the
    /// unique violation to the caller that "lost".
    LoseRace,
    /// Report a unique violation without committing anything, leaving
    /// the recovery read empty-handed.
    ConflictWithoutRow,
}

#[derive(Default)]
struct Faults {
    speaker_insert: Option<SpeakerInsertFault>,
    tag_insert_loses_race: bool,
    quote_write_rejections: u32,
}

#[derive(Default)]
struct DbState {
    speakers: Vec<Speaker>,
    aliases: Vec<SpeakerAlias>,
    quotes: Vec<Quote>,
    tags: Vec<Tag>,
    categories: Vec<Category>,
    quote_tags: HashMap<i64, Vec<TagId>>,
    quote_categories: HashMap<i64, Vec<CategoryId>>,
    sources: Vec<Source>,
    next_speaker_id: i64,
    next_alias_id: i64,
    next_quote_id: i64,
    next_tag_id: i64,
    next_source_id: i64,
    faults: Faults,
}

impl DbState {
    fn commit_speaker(&mut self, new_speaker: NewSpeaker) -> Speaker {
        self.next_speaker_id += 1;
        let speaker = Speaker {
            id: SpeakerId(self.next_speaker_id),
            name: new_speaker.name,
            slug: new_speaker.slug,
            description: None,
            created_at: new_speaker.created_at,
            updated_at: new_speaker.updated_at,
        };
        self.speakers.push(speaker.clone());
        speaker
    }

    fn commit_tag(&mut self, new_tag: NewTag) -> Tag {
        self.next_tag_id += 1;
        let tag = Tag {
            id: TagId(self.next_tag_id),
            name: new_tag.name,
            slug: new_tag.slug,
            description: None,
            created_at: new_tag.created_at,
            updated_at: new_tag.updated_at,
        };
        self.tags.push(tag.clone());
        tag
    }
}

pub struct InMemoryDb {
    state: Mutex<DbState>,
}

impl Default for InMemoryDb {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DbState::default()),
        }
    }

    /* ---- fault injection ---- */

    pub fn lose_next_speaker_insert(&self) {
        self.state.lock().unwrap().faults.speaker_insert = Some(SpeakerInsertFault::LoseRace);
    }

    pub fn report_speaker_conflict_without_row(&self) {
        self.state.lock().unwrap().faults.speaker_insert =
            Some(SpeakerInsertFault::ConflictWithoutRow);
    }

    pub fn lose_next_tag_insert(&self) {
        self.state.lock().unwrap().faults.tag_insert_loses_race = true;
    }

    /// The next `count` quote inserts/updates report a slug unique
    /// violation without committing, as if another writer landed the
    /// same slug between the existence probe and the write.
    pub fn reject_next_quote_writes(&self, count: u32) {
        self.state.lock().unwrap().faults.quote_write_rejections = count;
    }

    /* ---- seeding ---- */

    pub fn seed_speaker(&self, speaker: Speaker) {
        let mut state = self.state.lock().unwrap();
        state.next_speaker_id = state.next_speaker_id.max(i64::from(speaker.id));
        state.speakers.push(speaker);
    }

    pub fn seed_alias(&self, alias: SpeakerAlias) {
        let mut state = self.state.lock().unwrap();
        state.next_alias_id = state.next_alias_id.max(i64::from(alias.id));
        state.aliases.push(alias);
    }

    pub fn seed_quote(&self, quote: Quote) {
        let mut state = self.state.lock().unwrap();
        state.next_quote_id = state.next_quote_id.max(i64::from(quote.id));
        state.quotes.push(quote);
    }

    pub fn seed_tag(&self, tag: Tag) {
        let mut state = self.state.lock().unwrap();
        state.next_tag_id = state.next_tag_id.max(i64::from(tag.id));
        state.tags.push(tag);
    }

    pub fn seed_category(&self, category: Category) {
        let mut state = self.state.lock().unwrap();
        state.categories.push(category);
    }

    /* ---- assertion accessors ---- */

    pub fn speakers(&self) -> Vec<Speaker> {
        self.state.lock().unwrap().speakers.clone()
    }

    pub fn speaker_count(&self) -> usize {
        self.state.lock().unwrap().speakers.len()
    }

    pub fn quote_count(&self) -> usize {
        self.state.lock().unwrap().quotes.len()
    }

    pub fn quote(&self, id: i64) -> Option<Quote> {
        self.state
            .lock()
            .unwrap()
            .quotes
            .iter()
            .find(|quote| i64::from(quote.id) == id)
            .cloned()
    }

    pub fn tag_count(&self) -> usize {
        self.state.lock().unwrap().tags.len()
    }
}

/* --------------------------- SpeakerRepository --------------------------- */

#[async_trait]
impl SpeakerRepository for InMemoryDb {
    async fn find_by_id(&self, id: SpeakerId) -> DomainResult<Option<Speaker>> {
        let state = self.state.lock().unwrap();
        Ok(state.speakers.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[SpeakerId]) -> DomainResult<Vec<Speaker>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .speakers
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn find_by_normalized_name(&self, name_lower: &str) -> DomainResult<Option<Speaker>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .speakers
            .iter()
            .find(|s| s.name.as_str().to_lowercase() == name_lower)
            .cloned())
    }

    async fn find_by_normalized_alias(&self, alias_lower: &str) -> DomainResult<Option<Speaker>> {
        let state = self.state.lock().unwrap();
        let Some(alias) = state
            .aliases
            .iter()
            .find(|a| a.alias.as_str().to_lowercase() == alias_lower)
        else {
            return Ok(None);
        };
        Ok(state
            .speakers
            .iter()
            .find(|s| s.id == alias.speaker_id)
            .cloned())
    }

    async fn find_by_exact_name(&self, name: &str) -> DomainResult<Option<Speaker>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .speakers
            .iter()
            .find(|s| s.name.as_str() == name)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &SpeakerSlug) -> DomainResult<Option<Speaker>> {
        let state = self.state.lock().unwrap();
        Ok(state.speakers.iter().find(|s| &s.slug == slug).cloned())
    }

    async fn insert(&self, new_speaker: NewSpeaker) -> DomainResult<Speaker> {
        let mut state = self.state.lock().unwrap();
        match state.faults.speaker_insert.take() {
            Some(SpeakerInsertFault::LoseRace) => {
                state.commit_speaker(new_speaker);
                return Err(DomainError::UniqueViolation("speakers_name_key".into()));
            }
            Some(SpeakerInsertFault::ConflictWithoutRow) => {
                return Err(DomainError::UniqueViolation("speakers_name_key".into()));
            }
            None => {}
        }
        if state
            .speakers
            .iter()
            .any(|s| s.name.as_str() == new_speaker.name.as_str())
        {
            return Err(DomainError::UniqueViolation("speakers_name_key".into()));
        }
        if state.speakers.iter().any(|s| s.slug == new_speaker.slug) {
            return Err(DomainError::UniqueViolation("speakers_slug_key".into()));
        }
        Ok(state.commit_speaker(new_speaker))
    }

    async fn list(&self) -> DomainResult<Vec<Speaker>> {
        let state = self.state.lock().unwrap();
        let mut speakers = state.speakers.clone();
        speakers.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(speakers)
    }

    async fn add_alias(&self, new_alias: NewSpeakerAlias) -> DomainResult<SpeakerAlias> {
        let mut state = self.state.lock().unwrap();
        state.next_alias_id += 1;
        let alias = SpeakerAlias {
            id: AliasId(state.next_alias_id),
            speaker_id: new_alias.speaker_id,
            alias: new_alias.alias,
            created_at: new_alias.created_at,
            updated_at: new_alias.updated_at,
        };
        state.aliases.push(alias.clone());
        Ok(alias)
    }

    async fn remove_alias(&self, speaker_id: SpeakerId, alias_id: AliasId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.aliases.len();
        state
            .aliases
            .retain(|a| !(a.id == alias_id && a.speaker_id == speaker_id));
        if state.aliases.len() == before {
            return Err(DomainError::NotFound("alias not found".into()));
        }
        Ok(())
    }

    async fn aliases_for(&self, speaker_id: SpeakerId) -> DomainResult<Vec<SpeakerAlias>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .aliases
            .iter()
            .filter(|a| a.speaker_id == speaker_id)
            .cloned()
            .collect())
    }

    async fn list_aliases(&self) -> DomainResult<Vec<SpeakerAlias>> {
        let state = self.state.lock().unwrap();
        Ok(state.aliases.clone())
    }
}

/* -------------------------- QuoteWriteRepository -------------------------- */

#[async_trait]
impl QuoteWriteRepository for InMemoryDb {
    async fn insert(&self, new_quote: NewQuote) -> DomainResult<Quote> {
        let mut state = self.state.lock().unwrap();
        if state.faults.quote_write_rejections > 0 {
            state.faults.quote_write_rejections -= 1;
            return Err(DomainError::UniqueViolation("quotes_slug_key".into()));
        }
        if state.quotes.iter().any(|q| q.slug == new_quote.slug) {
            return Err(DomainError::UniqueViolation("quotes_slug_key".into()));
        }
        state.next_quote_id += 1;
        let quote = Quote {
            id: QuoteId(state.next_quote_id),
            text: new_quote.text,
            speaker_id: new_quote.speaker_id,
            slug: new_quote.slug,
            context: new_quote.context,
            location: new_quote.location,
            occurred_at: new_quote.occurred_at,
            published_at: new_quote.published_at,
            status: new_quote.status,
            quote_type: new_quote.quote_type,
            quote_type_note: new_quote.quote_type_note,
            is_verified: new_quote.is_verified,
            is_featured: new_quote.is_featured,
            view_count: 0,
            created_at: new_quote.created_at,
            updated_at: new_quote.updated_at,
        };
        state.quotes.push(quote.clone());
        Ok(quote)
    }

    async fn update(&self, update: QuoteUpdate) -> DomainResult<Quote> {
        let mut state = self.state.lock().unwrap();
        if state.faults.quote_write_rejections > 0 {
            state.faults.quote_write_rejections -= 1;
            return Err(DomainError::UniqueViolation("quotes_slug_key".into()));
        }
        if state
            .quotes
            .iter()
            .any(|q| q.slug == update.slug && q.id != update.id)
        {
            return Err(DomainError::UniqueViolation("quotes_slug_key".into()));
        }
        let quote = state
            .quotes
            .iter_mut()
            .find(|q| q.id == update.id)
            .ok_or_else(|| DomainError::NotFound("quote not found".into()))?;
        quote.text = update.text;
        quote.speaker_id = update.speaker_id;
        quote.slug = update.slug;
        quote.context = update.context;
        quote.location = update.location;
        quote.occurred_at = update.occurred_at;
        quote.published_at = update.published_at;
        quote.status = update.status;
        quote.quote_type = update.quote_type;
        quote.quote_type_note = update.quote_type_note;
        quote.is_verified = update.is_verified;
        quote.is_featured = update.is_featured;
        quote.updated_at = update.updated_at;
        Ok(quote.clone())
    }

    async fn delete(&self, id: QuoteId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.quotes.len();
        state.quotes.retain(|q| q.id != id);
        if state.quotes.len() == before {
            return Err(DomainError::NotFound("quote not found".into()));
        }
        let raw = i64::from(id);
        state.quote_tags.remove(&raw);
        state.quote_categories.remove(&raw);
        state.sources.retain(|s| s.quote_id != id);
        Ok(())
    }

    async fn set_verified(
        &self,
        id: QuoteId,
        verified: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<Quote> {
        let mut state = self.state.lock().unwrap();
        let quote = state
            .quotes
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| DomainError::NotFound("quote not found".into()))?;
        quote.is_verified = verified;
        quote.updated_at = now;
        Ok(quote.clone())
    }

    async fn set_featured(
        &self,
        id: QuoteId,
        featured: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<Quote> {
        let mut state = self.state.lock().unwrap();
        let quote = state
            .quotes
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| DomainError::NotFound("quote not found".into()))?;
        quote.is_featured = featured;
        quote.updated_at = now;
        Ok(quote.clone())
    }
}

/* --------------------------- QuoteReadRepository -------------------------- */

#[async_trait]
impl QuoteReadRepository for InMemoryDb {
    async fn find_by_id(&self, id: QuoteId) -> DomainResult<Option<Quote>> {
        let state = self.state.lock().unwrap();
        Ok(state.quotes.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &QuoteSlug) -> DomainResult<Option<Quote>> {
        let state = self.state.lock().unwrap();
        Ok(state.quotes.iter().find(|q| &q.slug == slug).cloned())
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Quote>> {
        let state = self.state.lock().unwrap();
        let mut quotes = state.quotes.clone();
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        quotes.truncate(limit as usize);
        Ok(quotes)
    }
}

/* ------------------------ QuoteRelationsRepository ------------------------ */

#[async_trait]
impl QuoteRelationsRepository for InMemoryDb {
    async fn set_tags(&self, quote_id: QuoteId, tag_ids: &[TagId]) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.quote_tags.insert(i64::from(quote_id), tag_ids.to_vec());
        Ok(())
    }

    async fn set_categories(
        &self,
        quote_id: QuoteId,
        category_ids: &[CategoryId],
        _now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .quote_categories
            .insert(i64::from(quote_id), category_ids.to_vec());
        Ok(())
    }

    async fn replace_sources(
        &self,
        quote_id: QuoteId,
        sources: Vec<NewSource>,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Source>> {
        let mut state = self.state.lock().unwrap();
        state.sources.retain(|s| s.quote_id != quote_id);
        let mut created = Vec::with_capacity(sources.len());
        for new_source in sources {
            state.next_source_id += 1;
            let source = Source {
                id: SourceId(state.next_source_id),
                quote_id,
                url: new_source.url,
                title: new_source.title,
                source_type: new_source.source_type,
                is_primary: new_source.is_primary,
                archived_url: new_source.archived_url,
                created_at: now,
                updated_at: now,
            };
            state.sources.push(source.clone());
            created.push(source);
        }
        Ok(created)
    }

    async fn tags_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        let ids = state
            .quote_tags
            .get(&i64::from(quote_id))
            .cloned()
            .unwrap_or_default();
        Ok(state
            .tags
            .iter()
            .filter(|tag| ids.contains(&tag.id))
            .cloned()
            .collect())
    }

    async fn categories_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let ids = state
            .quote_categories
            .get(&i64::from(quote_id))
            .cloned()
            .unwrap_or_default();
        Ok(state
            .categories
            .iter()
            .filter(|category| ids.contains(&category.id))
            .cloned()
            .collect())
    }

    async fn sources_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Source>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sources
            .iter()
            .filter(|s| s.quote_id == quote_id)
            .cloned()
            .collect())
    }
}

/* ----------------------------- TagRepository ------------------------------ */

#[async_trait]
impl TagRepository for InMemoryDb {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.iter().find(|t| t.name.as_str() == name).cloned())
    }

    async fn find_by_slug(&self, slug: &TagSlug) -> DomainResult<Option<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.iter().find(|t| &t.slug == slug).cloned())
    }

    async fn insert(&self, new_tag: NewTag) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        if state.faults.tag_insert_loses_race {
            state.faults.tag_insert_loses_race = false;
            state.commit_tag(new_tag);
            return Err(DomainError::UniqueViolation("tags_name_key".into()));
        }
        if state
            .tags
            .iter()
            .any(|t| t.name.as_str() == new_tag.name.as_str())
        {
            return Err(DomainError::UniqueViolation("tags_name_key".into()));
        }
        if state.tags.iter().any(|t| t.slug == new_tag.slug) {
            return Err(DomainError::UniqueViolation("tags_slug_key".into()));
        }
        Ok(state.commit_tag(new_tag))
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.clone())
    }
}

/* --------------------------- CategoryRepository --------------------------- */

#[async_trait]
impl CategoryRepository for InMemoryDb {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.clone())
    }
}
