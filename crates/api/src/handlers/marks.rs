//! Handlers for uploaded marks sheets.
//!
//! Marks are not persisted: preview scores rows in memory and upload only
//! acknowledges how many rows arrived.

use axum::response::IntoResponse;
use axum::Json;
use portal_core::cie::{score_row, CreditScheme, MarkRow, ScoredRow};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Request body for `POST /marks/preview`.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub credits: i32,
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
}

/// Scored rows plus the number of rows without a usable roll number.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub scheme: CreditScheme,
    pub rows: Vec<ScoredRow>,
    pub skipped: usize,
}

/// Request body for `POST /marks/upload`.
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct UploadAck {
    pub imported: usize,
}

/// POST /api/v1/marks/preview
///
/// Rows carrying their own total keep it; other rows get one computed
/// under the subject's credit scheme.
pub async fn preview_marks(Json(input): Json<PreviewRequest>) -> AppResult<impl IntoResponse> {
    let scheme = CreditScheme::from_credits(input.credits);
    let rows: Vec<ScoredRow> = input
        .rows
        .iter()
        .filter_map(MarkRow::from_raw)
        .map(|row| score_row(scheme, &row))
        .collect();
    let skipped = input.rows.len() - rows.len();

    Ok(Json(DataResponse {
        data: PreviewResponse {
            scheme,
            rows,
            skipped,
        },
    }))
}

/// POST /api/v1/marks/upload
pub async fn upload_marks(Json(input): Json<UploadRequest>) -> AppResult<impl IntoResponse> {
    let imported = input.rows.len();
    tracing::info!(imported, "Marks upload received");
    Ok(Json(DataResponse {
        data: UploadAck { imported },
    }))
}
