//! Query parameter types for the read endpoints.
//!
//! Every field is an optional string so that a missing or malformed value
//! never rejects the request; handlers turn an unusable context into an
//! empty result instead.

use portal_core::class_context::{normalize_name, parse_semester, ClassContext};
use serde::Deserialize;

/// `?semester=&branch=` (`sem` accepted for `semester`).
#[derive(Debug, Default, Deserialize)]
pub struct SemesterBranchParams {
    #[serde(alias = "sem")]
    pub semester: Option<String>,
    pub branch: Option<String>,
}

impl SemesterBranchParams {
    /// The parsed semester number and trimmed branch name, if both are usable.
    pub fn resolve(&self) -> Option<(i64, String)> {
        let semester = parse_semester(self.semester.as_deref()?)?;
        let branch = normalize_name("branch", self.branch.as_deref()?).ok()?;
        Some((semester, branch))
    }
}

/// `?semester=&branch=&section=` (`sem` accepted for `semester`).
#[derive(Debug, Default, Deserialize)]
pub struct ClassParams {
    #[serde(alias = "sem")]
    pub semester: Option<String>,
    pub branch: Option<String>,
    pub section: Option<String>,
}

impl ClassParams {
    pub fn context(&self) -> Option<ClassContext> {
        ClassContext::from_query(
            self.semester.as_deref(),
            self.branch.as_deref(),
            self.section.as_deref(),
        )
    }
}

/// `?semester=&branch=&section=&credits=` for template generation.
#[derive(Debug, Default, Deserialize)]
pub struct TemplateParams {
    #[serde(alias = "sem")]
    pub semester: Option<String>,
    pub branch: Option<String>,
    pub section: Option<String>,
    pub credits: Option<String>,
}

impl TemplateParams {
    pub fn context(&self) -> Option<ClassContext> {
        ClassContext::from_query(
            self.semester.as_deref(),
            self.branch.as_deref(),
            self.section.as_deref(),
        )
    }
}
