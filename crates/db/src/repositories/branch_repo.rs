//! Repository for the `branches` table.

use portal_core::types::DbId;
use sqlx::SqlitePool;

use crate::is_unique_violation;
use crate::models::branch::Branch;

/// Branch lookups and lazy creation.
pub struct BranchRepo;

impl BranchRepo {
    /// List all branches ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Branch>, sqlx::Error> {
        sqlx::query_as::<_, Branch>("SELECT id, name FROM branches ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Find a branch id by its name.
    pub async fn find_id(pool: &SqlitePool, name: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM branches WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Return the id for `name`, inserting the branch if absent.
    ///
    /// See [`SemesterRepo::resolve`](super::SemesterRepo::resolve) for the
    /// race handling.
    pub async fn resolve(pool: &SqlitePool, name: &str) -> Result<DbId, sqlx::Error> {
        if let Some(id) = Self::find_id(pool, name).await? {
            return Ok(id);
        }

        let inserted =
            sqlx::query_scalar::<_, DbId>("INSERT INTO branches (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(pool)
                .await;

        match inserted {
            Ok(id) => {
                tracing::debug!(name, id, "Branch created");
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => match Self::find_id(pool, name).await? {
                Some(id) => Ok(id),
                None => Err(e),
            },
            Err(e) => Err(e),
        }
    }
}
