use axum::{Router, extract::State, routing::get};
use safemenu_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
    pub database_ping_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadinessResponse {
    pub data: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn health_live(
    State(state): State<AppState>,
) -> Result<Response<LivenessResponse>, ApiError> {
    let database_ping_ms = state.service.health().await?;

    Ok(Response::OK(LivenessResponse {
        status: "UP".to_string(),
        database_ping_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let status = state.service.readiness().await?;

    Ok(Response::OK(ReadinessResponse { data: status }))
}

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/health/live"), get(health_live))
        .route(&format!("{root_path}/health/ready"), get(health_ready))
}
