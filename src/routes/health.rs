//! Health Check Endpoints
//!
//! - /health/ping - Simple liveness check
//! - /health/ready - Store connectivity check

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

use crate::db::DbClient;
use crate::error::ApiResult;

#[derive(Clone)]
pub struct HealthState {
    pub db: DbClient,
}

impl HealthState {
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }
}

/// GET /health/ping - Simple pong response
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, "pong")
}

/// GET /health/ready - Store connectivity check
pub async fn ready(State(state): State<Arc<HealthState>>) -> ApiResult<impl IntoResponse> {
    state.db.ping().await?;
    Ok((StatusCode::OK, "ready"))
}

/// Create the health routes router.
pub fn create_router(db: DbClient) -> Router {
    let state = Arc::new(HealthState::new(db));

    Router::new()
        .route("/ping", get(ping))
        .route("/ready", get(ready))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbConfig;

    #[test]
    fn test_health_router_builds() {
        let db = DbClient::from_config(&DbConfig::default()).unwrap();
        let _router = create_router(db);
    }
}
