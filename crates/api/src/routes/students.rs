use axum::routing::{get, post};
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Roster routes mounted at `/students`.
///
/// ```text
/// GET  /                    -> list_students
/// POST /bulk                -> bulk_import
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(students::list_students))
        .route("/bulk", post(students::bulk_import))
}
