use axum::routing::post;
use axum::Router;

use crate::handlers::marks;
use crate::state::AppState;

/// Marks routes mounted at `/marks`.
///
/// ```text
/// POST /preview             -> preview_marks
/// POST /upload              -> upload_marks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/preview", post(marks::preview_marks))
        .route("/upload", post(marks::upload_marks))
}
