// src/presentation/http/controllers/quotes.rs
use crate::application::{
    commands::quotes::{
        CreateQuoteCommand, DeleteQuoteCommand, SourceInput, ToggleFeaturedCommand,
        ToggleVerifiedCommand, UpdateQuoteCommand,
    },
    dto::quotes::{QuoteDto, QuoteListItemDto},
    queries::quotes::{GetQuoteBySlugQuery, GetQuoteQuery, ListQuotesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

fn default_status() -> String {
    "draft".into()
}

#[derive(Debug, Deserialize)]
pub struct QuoteListParams {
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SourceRequest {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub archived_url: Option<String>,
}

impl From<SourceRequest> for SourceInput {
    fn from(request: SourceRequest) -> Self {
        Self {
            url: request.url,
            title: request.title,
            source_type: request.source_type,
            is_primary: request.is_primary,
            archived_url: request.archived_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub text: String,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub occurred_at: Option<NaiveDate>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub quote_type: Option<String>,
    #[serde(default)]
    pub quote_type_note: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub sources: Vec<SourceRequest>,
}

/// Same shape as the create payload, but the status must always be sent:
/// a PUT replaces the full editorial state.
#[derive(Debug, Deserialize)]
pub struct UpdateQuoteRequest {
    pub text: String,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub occurred_at: Option<NaiveDate>,
    pub status: String,
    #[serde(default)]
    pub quote_type: Option<String>,
    #[serde(default)]
    pub quote_type_note: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub sources: Vec<SourceRequest>,
}

pub async fn list_quotes(
    Extension(state): Extension<HttpState>,
    Query(params): Query<QuoteListParams>,
) -> HttpResult<Json<Vec<QuoteListItemDto>>> {
    state
        .services
        .quote_queries
        .list_quotes(ListQuotesQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_quote(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<QuoteDto>> {
    state
        .services
        .quote_queries
        .get_quote(GetQuoteQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_quote_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<QuoteDto>> {
    state
        .services
        .quote_queries
        .get_quote_by_slug(GetQuoteBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_quote(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateQuoteRequest>,
) -> HttpResult<Json<QuoteDto>> {
    let command = CreateQuoteCommand {
        text: payload.text,
        speaker: payload.speaker,
        context: payload.context,
        location: payload.location,
        occurred_at: payload.occurred_at,
        status: payload.status,
        quote_type: payload.quote_type,
        quote_type_note: payload.quote_type_note,
        is_verified: payload.is_verified,
        is_featured: payload.is_featured,
        tags: payload.tags,
        categories: payload.categories,
        sources: payload.sources.into_iter().map(SourceInput::from).collect(),
    };

    state
        .services
        .quote_commands
        .create_quote(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_quote(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuoteRequest>,
) -> HttpResult<Json<QuoteDto>> {
    let command = UpdateQuoteCommand {
        id,
        text: payload.text,
        speaker: payload.speaker,
        context: payload.context,
        location: payload.location,
        occurred_at: payload.occurred_at,
        status: payload.status,
        quote_type: payload.quote_type,
        quote_type_note: payload.quote_type_note,
        is_verified: payload.is_verified,
        is_featured: payload.is_featured,
        tags: payload.tags,
        categories: payload.categories,
        sources: payload.sources.into_iter().map(SourceInput::from).collect(),
    };

    state
        .services
        .quote_commands
        .update_quote(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_quote(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .quote_commands
        .delete_quote(DeleteQuoteCommand { id })
        .await
        .into_http()?;
    Ok(Json(json!({ "deleted": true })))
}

pub async fn toggle_verified(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<QuoteDto>> {
    state
        .services
        .quote_commands
        .toggle_verified(ToggleVerifiedCommand { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn toggle_featured(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<QuoteDto>> {
    state
        .services
        .quote_commands
        .toggle_featured(ToggleFeaturedCommand { id })
        .await
        .into_http()
        .map(Json)
}
