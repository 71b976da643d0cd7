//! Subject models and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `subjects` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Subject {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub credits: i32,
    pub semester_id: DbId,
    pub branch_id: DbId,
    pub created_at: Timestamp,
}

/// Input for inserting a subject under already-resolved ids.
#[derive(Debug, Clone)]
pub struct CreateSubject {
    pub name: String,
    pub code: String,
    pub credits: i32,
    pub semester_id: DbId,
    pub branch_id: DbId,
}
