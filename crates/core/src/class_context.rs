//! Class context: the (semester, branch, section) triple that scopes
//! students and subjects.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Smallest valid semester number.
pub const MIN_SEMESTER: i64 = 1;

/// Maximum length of a branch or section name.
pub const MAX_NAME_LENGTH: usize = 64;

/// A normalized class context.
///
/// Construct through [`ClassContext::new`] so names are always trimmed and
/// non-empty, and the semester number is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassContext {
    pub semester: i64,
    pub branch: String,
    pub section: String,
}

impl ClassContext {
    /// Validate and normalize a class context.
    pub fn new(semester: i64, branch: &str, section: &str) -> Result<Self, CoreError> {
        validate_semester(semester)?;
        let branch = normalize_name("branch", branch)?;
        let section = normalize_name("section", section)?;
        Ok(Self {
            semester,
            branch,
            section,
        })
    }

    /// Build a context from optional query-string parts.
    ///
    /// Read paths degrade to an empty result on missing or malformed context,
    /// so this returns `None` instead of an error.
    pub fn from_query(
        semester: Option<&str>,
        branch: Option<&str>,
        section: Option<&str>,
    ) -> Option<Self> {
        let semester = parse_semester(semester?)?;
        Self::new(semester, branch?, section?).ok()
    }
}

impl std::fmt::Display for ClassContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Sem {} - Sec {}",
            self.branch, self.semester, self.section
        )
    }
}

/// Parse a semester number from a query-string value.
///
/// Returns `None` for blank, non-numeric, or non-positive input.
pub fn parse_semester(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= MIN_SEMESTER)
}

/// A semester as submitted in a JSON body.
///
/// Dashboard forms post the selected value as text, scripts usually send a
/// number; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SemesterInput {
    Number(i64),
    Text(String),
}

impl SemesterInput {
    /// The validated semester number.
    pub fn number(&self) -> Result<i64, CoreError> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                CoreError::Validation(format!("semester must be a number, got '{s}'"))
            })?,
        };
        validate_semester(n)?;
        Ok(n)
    }
}

/// Validate a semester number.
pub fn validate_semester(semester: i64) -> Result<(), CoreError> {
    if semester < MIN_SEMESTER {
        return Err(CoreError::Validation(format!(
            "semester must be at least {MIN_SEMESTER}, got {semester}"
        )));
    }
    Ok(())
}

/// Trim a branch or section name and reject blank or oversized values.
pub fn normalize_name(field: &str, raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(name.to_string())
}
