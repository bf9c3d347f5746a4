// src/infrastructure/repositories/postgres_quote.rs
use super::map_sqlx;
use super::postgres_taxonomy::{CategoryRow, TagRow};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::quote::{
    NewQuote, NewSource, Quote, QuoteId, QuoteReadRepository, QuoteRelationsRepository, QuoteSlug,
    QuoteText, QuoteUpdate, QuoteWriteRepository, Source, SourceId, SourceUrl,
};
use crate::domain::speaker::SpeakerId;
use crate::domain::taxonomy::{Category, CategoryId, Tag, TagId};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const QUOTE_COLUMNS: &str = "id, text, speaker_id, slug, context, location, occurred_at, \
     published_at, status, quote_type, quote_type_note, is_verified, is_featured, view_count, \
     created_at, updated_at";

#[derive(Clone)]
pub struct PostgresQuoteWriteRepository {
    pool: PgPool,
}

impl PostgresQuoteWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresQuoteReadRepository {
    pool: PgPool,
}

impl PostgresQuoteReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresQuoteRelationsRepository {
    pool: PgPool,
}

impl PostgresQuoteRelationsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct QuoteRow {
    id: i64,
    text: String,
    speaker_id: Option<i64>,
    slug: String,
    context: Option<String>,
    location: Option<String>,
    occurred_at: Option<NaiveDate>,
    published_at: Option<DateTime<Utc>>,
    status: String,
    quote_type: Option<String>,
    quote_type_note: Option<String>,
    is_verified: bool,
    is_featured: bool,
    view_count: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<QuoteRow> for Quote {
    type Error = DomainError;

    fn try_from(row: QuoteRow) -> Result<Self, Self::Error> {
        Ok(Quote {
            id: QuoteId::new(row.id)?,
            text: QuoteText::new(row.text)?,
            speaker_id: row.speaker_id.map(SpeakerId::new).transpose()?,
            slug: QuoteSlug::new(row.slug)?,
            context: row.context,
            location: row.location,
            occurred_at: row.occurred_at,
            published_at: row.published_at,
            status: row.status.parse()?,
            quote_type: row.quote_type.as_deref().map(str::parse).transpose()?,
            quote_type_note: row.quote_type_note,
            is_verified: row.is_verified,
            is_featured: row.is_featured,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct SourceRow {
    id: i64,
    quote_id: i64,
    url: String,
    title: Option<String>,
    source_type: Option<String>,
    is_primary: bool,
    archived_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SourceRow> for Source {
    type Error = DomainError;

    fn try_from(row: SourceRow) -> Result<Self, Self::Error> {
        Ok(Source {
            id: SourceId::new(row.id)?,
            quote_id: QuoteId::new(row.quote_id)?,
            url: SourceUrl::new(row.url)?,
            title: row.title,
            source_type: row.source_type.as_deref().map(str::parse).transpose()?,
            is_primary: row.is_primary,
            archived_url: row.archived_url.map(SourceUrl::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl QuoteWriteRepository for PostgresQuoteWriteRepository {
    async fn insert(&self, new_quote: NewQuote) -> DomainResult<Quote> {
        let NewQuote {
            text,
            speaker_id,
            slug,
            context,
            location,
            occurred_at,
            published_at,
            status,
            quote_type,
            quote_type_note,
            is_verified,
            is_featured,
            created_at,
            updated_at,
        } = new_quote;

        let sql = format!(
            "INSERT INTO quotes (text, speaker_id, slug, context, location, occurred_at, \
             published_at, status, quote_type, quote_type_note, is_verified, is_featured, \
             created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {QUOTE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(text.as_str())
            .bind(speaker_id.map(i64::from))
            .bind(slug.as_str())
            .bind(context)
            .bind(location)
            .bind(occurred_at)
            .bind(published_at)
            .bind(status.as_str())
            .bind(quote_type.map(|t| t.as_str()))
            .bind(quote_type_note)
            .bind(is_verified)
            .bind(is_featured)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Quote::try_from(row)
    }

    async fn update(&self, update: QuoteUpdate) -> DomainResult<Quote> {
        let QuoteUpdate {
            id,
            text,
            speaker_id,
            slug,
            context,
            location,
            occurred_at,
            published_at,
            status,
            quote_type,
            quote_type_note,
            is_verified,
            is_featured,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE quotes SET text = $1, speaker_id = $2, slug = $3, context = $4, \
             location = $5, occurred_at = $6, published_at = $7, status = $8, quote_type = $9, \
             quote_type_note = $10, is_verified = $11, is_featured = $12, updated_at = $13
             WHERE id = $14
             RETURNING {QUOTE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(text.as_str())
            .bind(speaker_id.map(i64::from))
            .bind(slug.as_str())
            .bind(context)
            .bind(location)
            .bind(occurred_at)
            .bind(published_at)
            .bind(status.as_str())
            .bind(quote_type.map(|t| t.as_str()))
            .bind(quote_type_note)
            .bind(is_verified)
            .bind(is_featured)
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("quote not found".into()))?;
        Quote::try_from(row)
    }

    async fn delete(&self, id: QuoteId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("quote not found".into()));
        }
        Ok(())
    }

    async fn set_verified(
        &self,
        id: QuoteId,
        verified: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<Quote> {
        let sql = format!(
            "UPDATE quotes SET is_verified = $2, updated_at = $3 WHERE id = $1
             RETURNING {QUOTE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(i64::from(id))
            .bind(verified)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("quote not found".into()))?;
        Quote::try_from(row)
    }

    async fn set_featured(
        &self,
        id: QuoteId,
        featured: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<Quote> {
        let sql = format!(
            "UPDATE quotes SET is_featured = $2, updated_at = $3 WHERE id = $1
             RETURNING {QUOTE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(i64::from(id))
            .bind(featured)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("quote not found".into()))?;
        Quote::try_from(row)
    }
}

#[async_trait]
impl QuoteReadRepository for PostgresQuoteReadRepository {
    async fn find_by_id(&self, id: QuoteId) -> DomainResult<Option<Quote>> {
        let sql = format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = $1");
        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Quote::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &QuoteSlug) -> DomainResult<Option<Quote>> {
        let sql = format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE slug = $1");
        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Quote::try_from).transpose()
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Quote>> {
        let sql = format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Quote::try_from).collect()
    }
}

#[async_trait]
impl QuoteRelationsRepository for PostgresQuoteRelationsRepository {
    async fn set_tags(&self, quote_id: QuoteId, tag_ids: &[TagId]) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("DELETE FROM quote_tags WHERE quote_id = $1")
            .bind(i64::from(quote_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        for tag_id in tag_ids {
            sqlx::query(
                "INSERT INTO quote_tags (quote_id, tag_id) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(i64::from(quote_id))
            .bind(i64::from(*tag_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }
        tx.commit().await.map_err(map_sqlx)
    }

    async fn set_categories(
        &self,
        quote_id: QuoteId,
        category_ids: &[CategoryId],
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("DELETE FROM quote_categories WHERE quote_id = $1")
            .bind(i64::from(quote_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        for category_id in category_ids {
            sqlx::query(
                "INSERT INTO quote_categories (quote_id, category_id, created_at, updated_at)
                 VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING",
            )
            .bind(i64::from(quote_id))
            .bind(i64::from(*category_id))
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }
        tx.commit().await.map_err(map_sqlx)
    }

    async fn replace_sources(
        &self,
        quote_id: QuoteId,
        sources: Vec<NewSource>,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Source>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("DELETE FROM sources WHERE quote_id = $1")
            .bind(i64::from(quote_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut inserted = Vec::with_capacity(sources.len());
        for source in sources {
            let NewSource {
                url,
                title,
                source_type,
                is_primary,
                archived_url,
            } = source;
            let row = sqlx::query_as::<_, SourceRow>(
                "INSERT INTO sources (quote_id, url, title, source_type, is_primary, \
                 archived_url, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 RETURNING id, quote_id, url, title, source_type, is_primary, archived_url, \
                 created_at, updated_at",
            )
            .bind(i64::from(quote_id))
            .bind(url.as_str())
            .bind(title)
            .bind(source_type.map(|t| t.as_str()))
            .bind(is_primary)
            .bind(archived_url.as_ref().map(SourceUrl::as_str))
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            inserted.push(Source::try_from(row)?);
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(inserted)
    }

    async fn tags_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT t.id, t.name, t.slug, t.description, t.created_at, t.updated_at
             FROM tags t
             INNER JOIN quote_tags qt ON qt.tag_id = t.id
             WHERE qt.quote_id = $1 ORDER BY t.name, t.id",
        )
        .bind(i64::from(quote_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn categories_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT c.id, c.name, c.slug, c.description, c.color, c.created_at, c.updated_at
             FROM categories c
             INNER JOIN quote_categories qc ON qc.category_id = c.id
             WHERE qc.quote_id = $1 ORDER BY c.name, c.id",
        )
        .bind(i64::from(quote_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn sources_for(&self, quote_id: QuoteId) -> DomainResult<Vec<Source>> {
        let rows = sqlx::query_as::<_, SourceRow>(
            "SELECT id, quote_id, url, title, source_type, is_primary, archived_url, \
             created_at, updated_at
             FROM sources WHERE quote_id = $1 ORDER BY id",
        )
        .bind(i64::from(quote_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Source::try_from).collect()
    }
}
