//! Integration tests for the semester / branch / section lookups.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

async fn seed(app: axum::Router, semester: i64, branch: &str, section: &str) {
    let response = post_json(
        app,
        "/api/v1/students/bulk",
        json!({"semester": semester, "branch": branch, "section": section, "rows": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_store_lists_nothing(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/v1/semesters").await).await;
    assert_eq!(json["data"], json!([]));

    let json = body_json(get(app, "/api/v1/branches").await).await;
    assert_eq!(json["data"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn semesters_and_branches_are_ordered(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    seed(app.clone(), 6, "ISE", "A").await;
    seed(app.clone(), 2, "CSE", "A").await;

    let json = body_json(get(app.clone(), "/api/v1/semesters").await).await;
    let numbers: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![2, 6]);

    let json = body_json(get(app, "/api/v1/branches").await).await;
    assert_eq!(json["data"][0]["name"], "CSE");
    assert_eq!(json["data"][1]["name"], "ISE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sections_accept_sem_alias(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    seed(app.clone(), 5, "CSE", "B").await;
    seed(app.clone(), 5, "CSE", "A").await;

    let json = body_json(get(app.clone(), "/api/v1/sections?semester=5&branch=CSE").await).await;
    assert_eq!(json["data"][0]["name"], "A");
    assert_eq!(json["data"][1]["name"], "B");

    let json = body_json(get(app, "/api/v1/sections?sem=5&branch=CSE").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sections_for_unknown_or_missing_context_are_empty(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    seed(app.clone(), 5, "CSE", "A").await;

    for uri in [
        "/api/v1/sections?semester=5&branch=NOPE",
        "/api/v1/sections?semester=abc&branch=CSE",
        "/api/v1/sections?branch=CSE",
        "/api/v1/sections",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await["data"], json!([]), "{uri}");
    }
}
