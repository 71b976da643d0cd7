//! Repository for the `sections` table.

use portal_core::types::DbId;
use sqlx::SqlitePool;

use crate::is_unique_violation;
use crate::models::section::SectionSummary;

/// Section lookups and lazy creation, scoped to a (semester, branch) pair.
pub struct SectionRepo;

impl SectionRepo {
    /// List the sections of a semester number and branch name, ordered by name.
    ///
    /// Unknown semester or branch yields an empty list.
    pub async fn list_for(
        pool: &SqlitePool,
        semester_number: i64,
        branch_name: &str,
    ) -> Result<Vec<SectionSummary>, sqlx::Error> {
        sqlx::query_as::<_, SectionSummary>(
            "SELECT sec.id, sec.name \
             FROM sections sec \
             JOIN semesters sem ON sem.id = sec.semester_id \
             JOIN branches br ON br.id = sec.branch_id \
             WHERE sem.number = $1 AND br.name = $2 \
             ORDER BY sec.name",
        )
        .bind(semester_number)
        .bind(branch_name)
        .fetch_all(pool)
        .await
    }

    /// Find a section id under already-resolved semester and branch ids.
    pub async fn find_id(
        pool: &SqlitePool,
        semester_id: DbId,
        branch_id: DbId,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id FROM sections \
             WHERE semester_id = $1 AND branch_id = $2 AND name = $3",
        )
        .bind(semester_id)
        .bind(branch_id)
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Return the id for `(semester_id, branch_id, name)`, inserting if absent.
    pub async fn resolve(
        pool: &SqlitePool,
        semester_id: DbId,
        branch_id: DbId,
        name: &str,
    ) -> Result<DbId, sqlx::Error> {
        if let Some(id) = Self::find_id(pool, semester_id, branch_id, name).await? {
            return Ok(id);
        }

        let inserted = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO sections (semester_id, branch_id, name) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(semester_id)
        .bind(branch_id)
        .bind(name)
        .fetch_one(pool)
        .await;

        match inserted {
            Ok(id) => {
                tracing::debug!(semester_id, branch_id, name, id, "Section created");
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => {
                match Self::find_id(pool, semester_id, branch_id, name).await? {
                    Some(id) => Ok(id),
                    None => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }
}
