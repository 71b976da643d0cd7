pub mod health;
pub mod marks;
pub mod reference;
pub mod students;
pub mod subjects;
pub mod templates;
pub mod usn_patterns;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /semesters                    list semesters
/// /branches                     list branches
/// /sections                     list sections (?semester=&branch=)
///
/// /students                     list roster (?semester=&branch=&section=)
/// /students/bulk                reconcile roster (POST)
///
/// /subjects                     list (?semester=&branch=), create (POST)
/// /usn-patterns                 list active, register (POST)
///
/// /templates                    marks template (?semester=&branch=&section=&credits=)
/// /marks/preview                score uploaded rows (POST)
/// /marks/upload                 acknowledge uploaded rows (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(reference::router())
        .nest("/students", students::router())
        .nest("/subjects", subjects::router())
        .nest("/usn-patterns", usn_patterns::router())
        .nest("/templates", templates::router())
        .nest("/marks", marks::router())
}
