//! Subject input validation.
//!
//! Subjects are scoped to a (semester, branch) pair. Duplicate subjects are
//! not rejected; only the shape of each field is checked here.

use serde::Deserialize;
use validator::Validate;

use crate::class_context::{normalize_name, SemesterInput};
use crate::error::CoreError;

/// Maximum length of a subject name.
pub const MAX_SUBJECT_NAME_LENGTH: u64 = 200;

/// Maximum length of a subject code.
pub const MAX_SUBJECT_CODE_LENGTH: u64 = 20;

/// Request payload for creating a subject.
///
/// `semester` takes the same number-or-text forms as the roster import.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubject {
    #[serde(alias = "sem")]
    pub semester: SemesterInput,
    pub branch: String,
    pub name: String,
    pub code: String,
    pub credits: i32,
}

/// A subject that passed [`NewSubject::normalized`]: trimmed and in range.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ValidSubject {
    pub semester: i64,
    pub branch: String,
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub code: String,
    #[validate(range(min = 1, max = 4, message = "must be between 1 and 4"))]
    pub credits: i32,
}

impl NewSubject {
    /// Validate field shapes and return the trimmed subject.
    pub fn normalized(&self) -> Result<ValidSubject, CoreError> {
        let subject = ValidSubject {
            semester: self.semester.number()?,
            branch: normalize_name("branch", &self.branch)?,
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            credits: self.credits,
        };
        subject.validate()?;
        Ok(subject)
    }
}
