//! Handlers for roll-number patterns.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portal_core::usn_pattern::validate_pattern;
use portal_db::models::usn_pattern::CreateUsnPattern;
use portal_db::repositories::UsnPatternRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/usn-patterns
pub async fn list_patterns(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let patterns = UsnPatternRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: patterns }))
}

/// POST /api/v1/usn-patterns
///
/// The pattern must compile as a regular expression. Blank descriptions are
/// stored as null.
pub async fn create_pattern(
    State(state): State<AppState>,
    Json(input): Json<CreateUsnPattern>,
) -> AppResult<impl IntoResponse> {
    validate_pattern(&input.pattern_text)?;
    let input = CreateUsnPattern {
        pattern_text: input.pattern_text,
        description: input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
    };
    let pattern = UsnPatternRepo::create(&state.pool, &input).await?;

    tracing::info!(pattern_id = pattern.id, "USN pattern registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: pattern })))
}
