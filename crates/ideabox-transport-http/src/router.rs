//! Axum router for the idea API.
//! Routes: `/api/ideas` (list, create), `/api/ideas/:id` (replace, patch,
//! delete), `/api/stats`, `/api/stats/week`, `GET /health` (liveness).

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use ideabox_registry::IdeaRepository;
use ideabox_types::{timestamp, IdeaId};

use crate::error::ApiError;
use crate::payload;

/// Number of days covered by `/api/stats/week`.
const WEEK_DAYS: u32 = 7;

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The idea store.
    pub repo: Arc<dyn IdeaRepository>,
}

/// Builds the axum `Router` with all API routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/ideas", get(list_ideas).post(create_idea))
        .route(
            "/api/ideas/:id",
            put(replace_idea).patch(patch_idea).delete(delete_idea),
        )
        .route("/api/stats", get(stats))
        .route("/api/stats/week", get(week))
        .route("/health", get(handle_health))
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "ideabox"}))
}

/// Turns the `:id` segment into an [`IdeaId`]. Undecodable segments
/// (e.g. `%FF`) are rejected with the same JSON error body as non-numeric ones.
fn parse_id(raw: Result<Path<String>, PathRejection>) -> Result<IdeaId, ApiError> {
    let Path(raw) = raw.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    raw.parse::<IdeaId>()
        .map_err(|e| ApiError::BadRequest(e.message))
}

fn body_text(body: &Bytes) -> Result<&str, ApiError> {
    std::str::from_utf8(body)
        .map_err(|e| ApiError::BadRequest(format!("request body is not valid UTF-8: {e}")))
}

fn message(text: &str) -> Json<serde_json::Value> {
    Json(json!({ "message": text }))
}

async fn list_ideas(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let ideas = state.repo.list().await?;
    tracing::debug!(count = ideas.len(), "listed ideas");
    Ok(Json(ideas))
}

async fn create_idea(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let idea = payload::parse_new_idea(body_text(&body)?)?;
    let id = state.repo.insert(&idea).await?;
    tracing::debug!(%id, "created idea");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "idea created", "id": id })),
    ))
}

async fn replace_idea(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(raw_id)?;
    let replacement = payload::parse_replace(body_text(&body)?)?;
    state.repo.replace(id, &replacement).await?;
    tracing::debug!(%id, "replaced idea");
    Ok(message("idea updated"))
}

async fn patch_idea(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(raw_id)?;
    let patch = payload::parse_patch(body_text(&body)?)?;
    state.repo.patch(id, &patch).await?;
    tracing::debug!(%id, "patched idea");
    Ok(message("idea updated"))
}

async fn delete_idea(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(raw_id)?;
    state.repo.delete(id).await?;
    tracing::debug!(%id, "deleted idea");
    Ok(message("idea deleted"))
}

async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.repo.stats(&timestamp::today()).await?;
    Ok(Json(stats))
}

/// Ideas per day over the last week, oldest day first.
async fn week(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let days = timestamp::last_days(WEEK_DAYS);
    let counts = state.repo.daily_counts(&days).await?;
    Ok(Json(counts))
}
