use crate::infra::{AppState, ScoredListingView};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use locality_scoring::error::AppError;
use locality_scoring::scoring::{parse_properties, CacheStats, PropertyInput, ScoreBreakdown};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct BatchScoreRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchScoreResponse {
    pub(crate) results: Vec<ScoredListingView>,
    pub(crate) cache: CacheStats,
}

pub(crate) fn scoring_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/locality/scores", post(score_endpoint))
        .route("/api/v1/locality/scores/explain", post(explain_endpoint))
        .route("/api/v1/locality/scores/batch", post(batch_endpoint))
        .route("/api/v1/locality/cache", get(cache_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(property): Json<PropertyInput>,
) -> Json<ScoredListingView> {
    let scores = state.scoring.get_cached_locality_scores(&property);
    Json(ScoredListingView::new(&property, scores))
}

pub(crate) async fn explain_endpoint(
    Extension(state): Extension<AppState>,
    Json(property): Json<PropertyInput>,
) -> Json<ScoreBreakdown> {
    Json(state.scoring.explain(&property))
}

pub(crate) async fn batch_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<BatchScoreRequest>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    let properties = parse_properties(Cursor::new(payload.csv.into_bytes()))?;

    let results = properties
        .iter()
        .map(|property| {
            ScoredListingView::new(property, state.scoring.get_cached_locality_scores(property))
        })
        .collect();

    Ok(Json(BatchScoreResponse {
        results,
        cache: state.scoring.cache_stats(),
    }))
}

pub(crate) async fn cache_endpoint(Extension(state): Extension<AppState>) -> Json<CacheStats> {
    Json(state.scoring.cache_stats())
}
