//! Semester model.

use portal_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `semesters` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Semester {
    pub id: DbId,
    pub number: i64,
}
