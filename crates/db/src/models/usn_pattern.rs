//! USN pattern models and DTOs.

use portal_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `usn_patterns` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UsnPattern {
    pub id: DbId,
    pub pattern_text: String,
    pub description: Option<String>,
    pub active: bool,
}

/// Input for registering a pattern. New patterns start active.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUsnPattern {
    pub pattern_text: String,
    pub description: Option<String>,
}
