//! Branch model.

use portal_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `branches` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Branch {
    pub id: DbId,
    pub name: String,
}
