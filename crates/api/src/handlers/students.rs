//! Handlers for class rosters.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use portal_core::class_context::{ClassContext, SemesterInput};
use portal_db::repositories::StudentRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::query::ClassParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /students/bulk`.
#[derive(Debug, Deserialize)]
pub struct BulkImportRequest {
    #[serde(alias = "sem")]
    pub semester: SemesterInput,
    pub branch: String,
    pub section: String,
    /// Raw spreadsheet rows; headers are normalized during import.
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
}

/// GET /api/v1/students?semester=&branch=&section=
///
/// Roster of the class ordered by roll number; empty on unusable context.
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<ClassParams>,
) -> AppResult<impl IntoResponse> {
    let students = match params.context() {
        Some(ctx) => StudentRepo::list_for_class(&state.pool, &ctx).await?,
        None => Vec::new(),
    };
    Ok(Json(DataResponse { data: students }))
}

/// POST /api/v1/students/bulk
///
/// Reconcile an uploaded roster with the stored students of the class and
/// report how many rows were added, updated, and skipped.
pub async fn bulk_import(
    State(state): State<AppState>,
    Json(input): Json<BulkImportRequest>,
) -> AppResult<impl IntoResponse> {
    let ctx = ClassContext::new(input.semester.number()?, &input.branch, &input.section)?;
    let summary = StudentRepo::import_roster(&state.pool, &ctx, &input.rows).await?;

    tracing::debug!(class = %ctx, total = summary.total(), "Roster import handled");

    Ok(Json(DataResponse { data: summary }))
}
