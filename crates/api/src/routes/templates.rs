use axum::routing::get;
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// Template routes mounted at `/templates`.
///
/// ```text
/// GET  /                    -> get_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(templates::get_template))
}
