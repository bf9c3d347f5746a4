// tests/support/helpers.rs
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use super::mocks::{FixedClock, InMemoryDb};
use verbatim_core::application::commands::quotes::{CreateQuoteCommand, UpdateQuoteCommand};
use verbatim_core::application::services::ApplicationServices;
use verbatim_core::infrastructure::util::DefaultSlugGenerator;
use verbatim_core::presentation::http::routes::build_router;
use verbatim_core::presentation::http::state::HttpState;

static FIXED_INSTANT: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());

pub fn fixed_instant() -> DateTime<Utc> {
    *FIXED_INSTANT
}

/// Wires the full application service graph over a single in-memory
/// store, the way `main` wires it over Postgres.
pub fn build_services(db: &Arc<InMemoryDb>, clock: &Arc<FixedClock>) -> ApplicationServices {
    ApplicationServices::new(
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        Arc::new(DefaultSlugGenerator),
        clock.clone(),
    )
}

/// The real router over the in-memory store, for oneshot request tests.
pub fn make_test_router(db: &Arc<InMemoryDb>, clock: &Arc<FixedClock>) -> axum::Router {
    let services = Arc::new(build_services(db, clock));
    build_router(HttpState { services })
}

/// A minimal create command: draft status, no speaker, no relations.
pub fn draft_quote(text: &str) -> CreateQuoteCommand {
    CreateQuoteCommand {
        text: text.into(),
        speaker: None,
        context: None,
        location: None,
        occurred_at: None,
        status: "draft".into(),
        quote_type: None,
        quote_type_note: None,
        is_verified: false,
        is_featured: false,
        tags: vec![],
        categories: vec![],
        sources: vec![],
    }
}

/// A minimal full-state update carrying the given text and clearing
/// everything optional.
pub fn update_command(id: i64, text: &str) -> UpdateQuoteCommand {
    UpdateQuoteCommand {
        id,
        text: text.into(),
        speaker: None,
        context: None,
        location: None,
        occurred_at: None,
        status: "draft".into(),
        quote_type: None,
        quote_type_note: None,
        is_verified: false,
        is_featured: false,
        tags: vec![],
        categories: vec![],
        sources: vec![],
    }
}
