//! Student models and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `students` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Student {
    pub id: DbId,
    pub usn: String,
    pub name: String,
    pub semester_id: DbId,
    pub branch_id: DbId,
    pub section_id: DbId,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for inserting a student into a resolved class.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub usn: String,
    pub name: String,
    pub semester_id: DbId,
    pub branch_id: DbId,
    pub section_id: DbId,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A roster line: what the dashboard needs to fill a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RosterLine {
    pub usn: String,
    pub name: String,
}
