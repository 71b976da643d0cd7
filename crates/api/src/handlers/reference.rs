//! Handlers for the class hierarchy lookups (semesters, branches, sections).
//!
//! These are pure reads: nothing here creates rows.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use portal_db::repositories::{BranchRepo, SectionRepo, SemesterRepo};

use crate::error::AppResult;
use crate::query::SemesterBranchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/semesters
pub async fn list_semesters(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let semesters = SemesterRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: semesters }))
}

/// GET /api/v1/branches
pub async fn list_branches(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let branches = BranchRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: branches }))
}

/// GET /api/v1/sections?semester=&branch=
///
/// Empty when either parameter is missing, malformed, or unknown.
pub async fn list_sections(
    State(state): State<AppState>,
    Query(params): Query<SemesterBranchParams>,
) -> AppResult<impl IntoResponse> {
    let sections = match params.resolve() {
        Some((semester, branch)) => SectionRepo::list_for(&state.pool, semester, &branch).await?,
        None => Vec::new(),
    };
    Ok(Json(DataResponse { data: sections }))
}
