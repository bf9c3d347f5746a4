use crate::domain::errors::DomainError;

const CNT_SPEAKER_NAME: &str = "speakers_name_key";
const CNT_SPEAKER_SLUG: &str = "speakers_slug_key";
const CNT_QUOTE_SLUG: &str = "quotes_slug_key";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_TAG_SLUG: &str = "tags_slug_key";

/// Collapses driver errors onto domain errors. Unique violations on the
/// named constraints become [`DomainError::UniqueViolation`] so the
/// resolver and the slug fallback paths can dispatch on them.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_SPEAKER_NAME => {
                        DomainError::UniqueViolation("speaker name already exists".into())
                    }
                    CNT_SPEAKER_SLUG => {
                        DomainError::UniqueViolation("speaker slug already exists".into())
                    }
                    CNT_QUOTE_SLUG => {
                        DomainError::UniqueViolation("quote slug already exists".into())
                    }
                    CNT_TAG_NAME => DomainError::UniqueViolation("tag name already exists".into()),
                    CNT_TAG_SLUG => DomainError::UniqueViolation("tag slug already exists".into()),
                    other if other.ends_with("_fkey") => {
                        DomainError::NotFound("referenced record not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::UniqueViolation("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
