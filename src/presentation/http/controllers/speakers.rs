// src/presentation/http/controllers/speakers.rs
use crate::application::{
    commands::speakers::{AddSpeakerAliasCommand, RemoveSpeakerAliasCommand},
    dto::speakers::{SpeakerAliasDto, SpeakerDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct AddAliasRequest {
    pub alias: String,
}

pub async fn list_speakers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<SpeakerDto>>> {
    state
        .services
        .speaker_queries
        .list_speakers()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_speaker(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<SpeakerDto>> {
    state
        .services
        .speaker_queries
        .get_speaker(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn add_alias(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<AddAliasRequest>,
) -> HttpResult<Json<SpeakerAliasDto>> {
    state
        .services
        .speaker_commands
        .add_alias(AddSpeakerAliasCommand {
            speaker_id: id,
            alias: payload.alias,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn remove_alias(
    Extension(state): Extension<HttpState>,
    Path((id, alias_id)): Path<(i64, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .speaker_commands
        .remove_alias(RemoveSpeakerAliasCommand {
            speaker_id: id,
            alias_id,
        })
        .await
        .into_http()?;
    Ok(Json(json!({ "deleted": true })))
}
