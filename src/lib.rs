//! Roster API - Student Record Service
//!
//! A minimal REST service exposing create, list, update and delete over a
//! single `students` table in PostgreSQL. Each request is a stateless,
//! self-contained translation between the JSON wire format and a
//! parameterized SQL statement; the store is the sole durable owner of the
//! data.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use db::{DbClient, DbConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::create_api_router;
pub use types::Student;
