//! Route definitions for the class hierarchy lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::reference;
use crate::state::AppState;

/// Lookup routes merged at the `/api/v1` root.
///
/// ```text
/// GET /semesters            -> list_semesters
/// GET /branches             -> list_branches
/// GET /sections             -> list_sections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/semesters", get(reference::list_semesters))
        .route("/branches", get(reference::list_branches))
        .route("/sections", get(reference::list_sections))
}
