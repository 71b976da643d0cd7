//! Handler for downloadable marks-entry templates.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use portal_core::cie::build_template;
use portal_core::error::CoreError;
use portal_db::repositories::StudentRepo;

use crate::error::AppResult;
use crate::query::TemplateParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Allowed credit range for a subject.
const CREDIT_RANGE: std::ops::RangeInclusive<i32> = 1..=4;

/// GET /api/v1/templates?semester=&branch=&section=&credits=
///
/// Headers, column widths, and one row per student of the class with its
/// total formula. A class with no students yields a template with no rows.
pub async fn get_template(
    State(state): State<AppState>,
    Query(params): Query<TemplateParams>,
) -> AppResult<impl IntoResponse> {
    let ctx = params.context().ok_or_else(|| {
        CoreError::Validation("semester, branch and section are required".to_string())
    })?;
    let credits = parse_credits(params.credits.as_deref())?;

    let students: Vec<(String, String)> = StudentRepo::list_for_class(&state.pool, &ctx)
        .await?
        .into_iter()
        .map(|line| (line.usn, line.name))
        .collect();

    let template = build_template(&ctx.to_string(), credits, &students);
    Ok(Json(DataResponse { data: template }))
}

fn parse_credits(raw: Option<&str>) -> Result<i32, CoreError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("credits is required".to_string()))?;
    raw.parse::<i32>()
        .ok()
        .filter(|c| CREDIT_RANGE.contains(c))
        .ok_or_else(|| {
            CoreError::Validation(format!("credits must be between 1 and 4, got '{raw}'"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn credits_must_be_present_and_in_range() {
        assert_eq!(parse_credits(Some(" 4 ")).unwrap(), 4);
        assert_matches!(parse_credits(None), Err(CoreError::Validation(_)));
        assert_matches!(parse_credits(Some("")), Err(CoreError::Validation(_)));
        assert_matches!(parse_credits(Some("9")), Err(CoreError::Validation(_)));
        assert_matches!(parse_credits(Some("four")), Err(CoreError::Validation(_)));
    }
}
