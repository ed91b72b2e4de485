//! Health check handlers

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::State;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};
use crate::transfer::AckStats;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Acknowledgment worker counters
    pub acks: AckStats,
}

/// Database ping response data
#[derive(serde::Serialize, ToSchema)]
pub struct PingDbResponse {
    #[schema(example = "ok")]
    pub database: String,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Liveness check
///
/// Always 200 while the process serves requests. Does not touch the database.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service alive", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<HealthResponse> {
    ok(HealthResponse {
        timestamp_ms: now_ms(),
        acks: state.ack_worker.stats(),
    })
}

/// Database connectivity check
///
/// - Reachable: 200 OK
/// - Unreachable or not configured: 503 Service Unavailable
#[utoipa::path(
    get,
    path = "/api/v1/ping-db",
    responses(
        (status = 200, description = "Database reachable", body = PingDbResponse, content_type = "application/json"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "System"
)]
pub async fn ping_db(State(state): State<Arc<AppState>>) -> ApiResult<PingDbResponse> {
    let db = state
        .pg_db
        .as_ref()
        .ok_or_else(|| ApiError::service_unavailable("Database not configured"))?;

    match db.health_check().await {
        Ok(()) => ok(PingDbResponse {
            database: "ok".to_string(),
        }),
        Err(e) => {
            tracing::error!(error = %e, "[HEALTH] PostgreSQL ping failed");
            ApiError::service_unavailable("unavailable").into_err()
        }
    }
}
