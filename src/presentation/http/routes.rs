// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{quotes, speakers, taxonomy};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::{delete, get, patch, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/quotes",
            get(quotes::list_quotes).post(quotes::create_quote),
        )
        .route(
            "/api/v1/quotes/by-slug/{slug}",
            get(quotes::get_quote_by_slug),
        )
        .route(
            "/api/v1/quotes/{id}",
            get(quotes::get_quote)
                .put(quotes::update_quote)
                .delete(quotes::delete_quote),
        )
        .route("/api/v1/quotes/{id}/verified", patch(quotes::toggle_verified))
        .route("/api/v1/quotes/{id}/featured", patch(quotes::toggle_featured))
        .route("/api/v1/speakers", get(speakers::list_speakers))
        .route("/api/v1/speakers/{id}", get(speakers::get_speaker))
        .route("/api/v1/speakers/{id}/aliases", post(speakers::add_alias))
        .route(
            "/api/v1/speakers/{id}/aliases/{alias_id}",
            delete(speakers::remove_alias),
        )
        .route("/api/v1/tags", get(taxonomy::list_tags))
        .route("/api/v1/categories", get(taxonomy::list_categories))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
