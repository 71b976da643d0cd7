use axum::routing::get;
use axum::Router;

use crate::handlers::subjects;
use crate::state::AppState;

/// Subject routes mounted at `/subjects`.
///
/// ```text
/// GET  /                    -> list_subjects
/// POST /                    -> create_subject
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(subjects::list_subjects).post(subjects::create_subject),
    )
}
