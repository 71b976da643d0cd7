//! Integration tests for templates and marks uploads.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn template_lists_class_with_formulas(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    post_json(
        app.clone(),
        "/api/v1/students/bulk",
        json!({
            "semester": 5, "branch": "CSE", "section": "A",
            "rows": [{"usn": "1AB20CS002", "name": "Bob"}, {"usn": "1AB20CS001", "name": "Alice"}]
        }),
    )
    .await;

    let response = get(
        app,
        "/api/v1/templates?semester=5&branch=CSE&section=A&credits=4",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let template = &json["data"];

    assert_eq!(template["title"], "CSE - Sem 5 - Sec A");
    assert_eq!(template["headers"].as_array().unwrap().len(), 11);
    assert_eq!(template["rows"][0]["sl_no"], 1);
    assert_eq!(template["rows"][0]["usn"], "1AB20CS001");
    assert_eq!(template["rows"][1]["name"], "Bob");
    assert!(template["rows"][0]["total_formula"]
        .as_str()
        .unwrap()
        .contains("LARGE(D2:F2,1)"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn template_for_unknown_class_has_no_rows(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/templates?semester=2&branch=ECE&section=B&credits=3",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["rows"], json!([]));
    assert_eq!(json["data"]["headers"].as_array().unwrap().len(), 9);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn template_requires_credits(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/templates?semester=2&branch=ECE&section=B").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn preview_computes_missing_totals(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/marks/preview",
        json!({
            "credits": 3,
            "rows": [
                {"USN": "1", "IA1": 40, "IA2": 40, "IA3": 0, "ASG1": 25, "ASG2": 25},
                {"usn": "2", "Total CIE (50)": 33},
                {"name": "no roll"}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["scheme"], "standard");
    assert_eq!(data["skipped"], 1);
    assert_eq!(data["rows"][0]["usn"], "1");
    assert_eq!(data["rows"][0]["total"], 50.0);
    assert_eq!(data["rows"][0]["computed"], true);
    assert_eq!(data["rows"][1]["total"], 33.0);
    assert_eq!(data["rows"][1]["computed"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn preview_treats_non_finite_cells_as_blank(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/marks/preview",
        json!({
            "credits": 3,
            "rows": [{"usn": "1", "IA1": "NaN", "IA2": 40, "IA3": 40, "Total": "inf"}]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let row = &json["data"]["rows"][0];

    assert_eq!(row["computed"], true);
    assert_eq!(row["total"], 25.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_acknowledges_row_count(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/marks/upload",
        json!({"rows": [{"usn": "1"}, {"usn": "2"}, {}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!({"imported": 3}));
}
