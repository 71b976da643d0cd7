//! Handlers for the subject catalog.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portal_core::subject::NewSubject;
use portal_db::repositories::SubjectRepo;

use crate::error::AppResult;
use crate::query::SemesterBranchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/subjects?semester=&branch=
pub async fn list_subjects(
    State(state): State<AppState>,
    Query(params): Query<SemesterBranchParams>,
) -> AppResult<impl IntoResponse> {
    let subjects = match params.resolve() {
        Some((semester, branch)) => SubjectRepo::list_for(&state.pool, semester, &branch).await?,
        None => Vec::new(),
    };
    Ok(Json(DataResponse { data: subjects }))
}

/// POST /api/v1/subjects
///
/// Semester and branch are created on demand. Duplicates are accepted.
pub async fn create_subject(
    State(state): State<AppState>,
    Json(input): Json<NewSubject>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized()?;
    let subject = SubjectRepo::create(&state.pool, &input).await?;

    tracing::info!(subject_id = subject.id, code = %subject.code, "Subject created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: subject })))
}
