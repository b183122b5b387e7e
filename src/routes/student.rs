//! Student REST API Routes
//!
//! Axum route handlers for the four student record operations. Each handler
//! is a single linear request/response transaction: decode, execute against
//! the store, map the outcome.
//!
//! The paths are the service's published wire contract and are kept as-is.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;

use crate::{
    db::DbClient,
    error::ApiResult,
    types::Student,
};

// ============================================================================
// SHARED STATE
// ============================================================================

/// Shared application state for student routes.
#[derive(Clone)]
pub struct StudentState {
    pub db: DbClient,
}

impl StudentState {
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /AddStudent - Insert a new student record.
///
/// The payload's `student_id` is ignored; the store assigns one. No
/// field-level validation is applied beyond type-correct decoding.
pub async fn add_student(
    State(state): State<Arc<StudentState>>,
    payload: Result<Json<Student>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!("Adding a new student.");

    let Json(student) = payload?;
    state.db.student_create(&student).await?;

    Ok((StatusCode::OK, "Student added successfully!"))
}

/// GET /Getstudents - List all student records.
///
/// Row order is the store's natural return order; no sort is imposed.
pub async fn get_students(
    State(state): State<Arc<StudentState>>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!("Retrieving students.");

    let students = state.db.student_list().await?;

    Ok(Json(students))
}

/// PUT /UpdateStudent - Update the record matching the payload's id.
///
/// Sets every non-id field. A zero affected-row count means no row matched
/// and is reported as not found rather than silent success.
pub async fn update_student(
    State(state): State<Arc<StudentState>>,
    payload: Result<Json<Student>, JsonRejection>,
) -> ApiResult<Response> {
    tracing::info!("Updating student.");

    let Json(student) = payload?;
    let affected = state.db.student_update(&student).await?;

    if affected > 0 {
        Ok((StatusCode::OK, "Student updated successfully!").into_response())
    } else {
        Ok((StatusCode::NOT_FOUND, "Student not found.").into_response())
    }
}

/// DELETE /students/{id} - Delete the record matching the path id.
///
/// A zero affected-row count is a first-class not-found outcome, not a
/// failure.
pub async fn delete_student(
    State(state): State<Arc<StudentState>>,
    Path(id): Path<i32>,
) -> ApiResult<Response> {
    tracing::info!(id, "Deleting student.");

    let affected = state.db.student_delete(id).await?;

    if affected > 0 {
        Ok((StatusCode::OK, "Student deleted successfully!").into_response())
    } else {
        Ok((StatusCode::NOT_FOUND, "Student not found.").into_response())
    }
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the student routes router.
pub fn create_router(db: DbClient) -> Router {
    let state = Arc::new(StudentState::new(db));

    Router::new()
        .route("/AddStudent", post(add_student))
        .route("/Getstudents", get(get_students))
        .route("/UpdateStudent", put(update_student))
        .route("/students/:id", delete(delete_student))
        .with_state(state)
}
