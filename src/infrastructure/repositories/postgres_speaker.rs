// src/infrastructure/repositories/postgres_speaker.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::speaker::{
    AliasId, AliasName, NewSpeaker, NewSpeakerAlias, Speaker, SpeakerAlias, SpeakerId, SpeakerName,
    SpeakerRepository, SpeakerSlug,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSpeakerRepository {
    pool: PgPool,
}

impl PostgresSpeakerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SpeakerRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SpeakerRow> for Speaker {
    type Error = DomainError;

    fn try_from(row: SpeakerRow) -> Result<Self, Self::Error> {
        Ok(Speaker {
            id: SpeakerId::new(row.id)?,
            name: SpeakerName::new(row.name)?,
            slug: SpeakerSlug::new(row.slug)?,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AliasRow {
    id: i64,
    speaker_id: i64,
    alias: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AliasRow> for SpeakerAlias {
    type Error = DomainError;

    fn try_from(row: AliasRow) -> Result<Self, Self::Error> {
        Ok(SpeakerAlias {
            id: AliasId::new(row.id)?,
            speaker_id: SpeakerId::new(row.speaker_id)?,
            alias: AliasName::new(row.alias)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SpeakerRepository for PostgresSpeakerRepository {
    async fn find_by_id(&self, id: SpeakerId) -> DomainResult<Option<Speaker>> {
        let row = sqlx::query_as::<_, SpeakerRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM speakers WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Speaker::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[SpeakerId]) -> DomainResult<Vec<Speaker>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, SpeakerRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM speakers WHERE id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Speaker::try_from).collect()
    }

    async fn find_by_normalized_name(&self, name_lower: &str) -> DomainResult<Option<Speaker>> {
        // ORDER BY id keeps the result stable if concurrent inserts ever
        // landed two case variants of the same name.
        let row = sqlx::query_as::<_, SpeakerRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM speakers WHERE LOWER(name) = $1 ORDER BY id LIMIT 1",
        )
        .bind(name_lower)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Speaker::try_from).transpose()
    }

    async fn find_by_normalized_alias(&self, alias_lower: &str) -> DomainResult<Option<Speaker>> {
        let row = sqlx::query_as::<_, SpeakerRow>(
            "SELECT s.id, s.name, s.slug, s.description, s.created_at, s.updated_at
             FROM speakers s
             INNER JOIN speaker_aliases a ON a.speaker_id = s.id
             WHERE LOWER(a.alias) = $1 ORDER BY a.id LIMIT 1",
        )
        .bind(alias_lower)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Speaker::try_from).transpose()
    }

    async fn find_by_exact_name(&self, name: &str) -> DomainResult<Option<Speaker>> {
        let row = sqlx::query_as::<_, SpeakerRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM speakers WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Speaker::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &SpeakerSlug) -> DomainResult<Option<Speaker>> {
        let row = sqlx::query_as::<_, SpeakerRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM speakers WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Speaker::try_from).transpose()
    }

    async fn insert(&self, new_speaker: NewSpeaker) -> DomainResult<Speaker> {
        let NewSpeaker {
            name,
            slug,
            created_at,
            updated_at,
        } = new_speaker;

        let row = sqlx::query_as::<_, SpeakerRow>(
            "INSERT INTO speakers (name, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, slug, description, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Speaker::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<Speaker>> {
        let rows = sqlx::query_as::<_, SpeakerRow>(
            "SELECT id, name, slug, description, created_at, updated_at
             FROM speakers ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Speaker::try_from).collect()
    }

    async fn add_alias(&self, new_alias: NewSpeakerAlias) -> DomainResult<SpeakerAlias> {
        let NewSpeakerAlias {
            speaker_id,
            alias,
            created_at,
            updated_at,
        } = new_alias;

        let row = sqlx::query_as::<_, AliasRow>(
            "INSERT INTO speaker_aliases (speaker_id, alias, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, speaker_id, alias, created_at, updated_at",
        )
        .bind(i64::from(speaker_id))
        .bind(alias.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        SpeakerAlias::try_from(row)
    }

    async fn remove_alias(&self, speaker_id: SpeakerId, alias_id: AliasId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM speaker_aliases WHERE id = $1 AND speaker_id = $2")
            .bind(i64::from(alias_id))
            .bind(i64::from(speaker_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("alias not found".into()));
        }
        Ok(())
    }

    async fn aliases_for(&self, speaker_id: SpeakerId) -> DomainResult<Vec<SpeakerAlias>> {
        let rows = sqlx::query_as::<_, AliasRow>(
            "SELECT id, speaker_id, alias, created_at, updated_at
             FROM speaker_aliases WHERE speaker_id = $1 ORDER BY id",
        )
        .bind(i64::from(speaker_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(SpeakerAlias::try_from).collect()
    }

    async fn list_aliases(&self) -> DomainResult<Vec<SpeakerAlias>> {
        let rows = sqlx::query_as::<_, AliasRow>(
            "SELECT id, speaker_id, alias, created_at, updated_at
             FROM speaker_aliases ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(SpeakerAlias::try_from).collect()
    }
}
