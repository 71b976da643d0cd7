//! Section model.

use portal_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A section as listed for a (semester, branch) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SectionSummary {
    pub id: DbId,
    pub name: String,
}
