use axum::routing::get;
use axum::Router;

use crate::handlers::usn_patterns;
use crate::state::AppState;

/// USN pattern routes mounted at `/usn-patterns`.
///
/// ```text
/// GET  /                    -> list_patterns
/// POST /                    -> create_pattern
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(usn_patterns::list_patterns).post(usn_patterns::create_pattern),
    )
}
