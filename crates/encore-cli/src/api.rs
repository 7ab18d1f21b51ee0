use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use encore_core::{Role, SignalRecord};
use encore_trust::TrustEngine;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub struct ApiState {
    pub engine: TrustEngine,
}

pub fn api_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/score", post(score_handler))
        .route("/api/gate", post(gate_handler))
        .route("/api/suggestions", post(suggestions_handler))
        .route("/api/thresholds", get(thresholds_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "encore-api"
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreRequest {
    record: SignalRecord,
    now: Option<DateTime<Utc>>,
}

async fn score_handler(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<ScoreRequest>,
) -> Json<serde_json::Value> {
    let now = body.now.unwrap_or_else(Utc::now);
    let breakdown = state.engine.compute_score(&body.record, now);
    Json(serde_json::to_value(&breakdown).unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GateRequest {
    record: SignalRecord,
    feature: String,
    now: Option<DateTime<Utc>>,
}

async fn gate_handler(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<GateRequest>,
) -> Json<serde_json::Value> {
    let now = body.now.unwrap_or_else(Utc::now);
    let breakdown = state.engine.compute_score(&body.record, now);
    let thresholds = state.engine.thresholds();
    let allowed = thresholds.can_access(breakdown.role, &body.feature, breakdown.final_score);
    let points_needed = thresholds.points_needed(breakdown.role, &body.feature, breakdown.final_score);

    info!(feature = %body.feature, role = breakdown.role.as_str(), allowed, "gate decision");

    Json(serde_json::json!({
        "feature": body.feature,
        "role": breakdown.role.as_str(),
        "score": breakdown.final_score,
        "allowed": allowed,
        "pointsNeeded": points_needed,
    }))
}

async fn suggestions_handler(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<ScoreRequest>,
) -> Json<serde_json::Value> {
    let now = body.now.unwrap_or_else(Utc::now);
    let suggestions = state.engine.improvement_suggestions(&body.record, now);
    let next_unlock = state.engine.next_unlock(&body.record, now);
    Json(serde_json::json!({
        "suggestions": serde_json::to_value(&suggestions).unwrap_or_default(),
        "nextUnlock": serde_json::to_value(&next_unlock).unwrap_or_default(),
    }))
}

#[derive(Deserialize)]
struct ThresholdParams {
    role: Option<String>,
}

async fn thresholds_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ThresholdParams>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let thresholds = state.engine.thresholds();
    match params.role.as_deref() {
        None => Ok(Json(serde_json::to_value(thresholds).unwrap_or_default())),
        Some(name) => {
            let role = parse_role(name).ok_or(StatusCode::BAD_REQUEST)?;
            let table = thresholds.for_role(role);
            let mut map = serde_json::Map::new();
            map.insert(
                role.as_str().to_string(),
                serde_json::to_value(table).unwrap_or_default(),
            );
            Ok(Json(serde_json::Value::Object(map)))
        }
    }
}

pub fn parse_role(s: &str) -> Option<Role> {
    match s.to_lowercase().as_str() {
        "musician" => Some(Role::Musician),
        "teacher" => Some(Role::Teacher),
        "client" => Some(Role::Client),
        "booker" => Some(Role::Booker),
        _ => None,
    }
}

pub async fn run_api(
    bind: &str,
    port: u16,
    engine: TrustEngine,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(ApiState { engine });
    let router = api_router(state);

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("admin API listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
