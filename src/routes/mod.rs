//! REST API Routes Module
//!
//! Assembles the student and health routers into the full application
//! router, with CORS and request tracing applied as outer layers.

pub mod health;
pub mod student;

use axum::Router;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::db::DbClient;

pub use health::create_router as health_router;
pub use student::create_router as student_router;

/// Build the complete application router.
///
/// The database client is injected once here; handlers take connections
/// per request from its pool.
pub fn create_api_router(db: DbClient, config: &ApiConfig) -> Router {
    let cors = build_cors_layer(config);

    Router::new()
        .merge(student::create_router(db.clone()))
        .nest("/health", health::create_router(db))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Configure CORS from config: permissive when no origins are set (dev
/// mode), restricted to the configured list otherwise.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
