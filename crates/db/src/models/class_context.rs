//! Resolved class context.

use portal_core::types::DbId;
use serde::Serialize;

/// Row identifiers of a materialized (semester, branch, section) chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedClass {
    pub semester_id: DbId,
    pub branch_id: DbId,
    pub section_id: DbId,
}
