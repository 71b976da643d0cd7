//! Repository for the `semesters` table.

use portal_core::types::DbId;
use sqlx::SqlitePool;

use crate::is_unique_violation;
use crate::models::semester::Semester;

/// Semester lookups and lazy creation.
pub struct SemesterRepo;

impl SemesterRepo {
    /// List all semesters ordered by number.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Semester>, sqlx::Error> {
        sqlx::query_as::<_, Semester>("SELECT id, number FROM semesters ORDER BY number")
            .fetch_all(pool)
            .await
    }

    /// Find a semester id by its number.
    pub async fn find_id(pool: &SqlitePool, number: i64) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM semesters WHERE number = $1")
            .bind(number)
            .fetch_optional(pool)
            .await
    }

    /// Return the id for `number`, inserting the semester if absent.
    ///
    /// Idempotent under sequential calls. If a concurrent writer inserts the
    /// same number between the lookup and the insert, the unique constraint
    /// rejects ours and the winner's id is fetched instead.
    pub async fn resolve(pool: &SqlitePool, number: i64) -> Result<DbId, sqlx::Error> {
        if let Some(id) = Self::find_id(pool, number).await? {
            return Ok(id);
        }

        let inserted =
            sqlx::query_scalar::<_, DbId>("INSERT INTO semesters (number) VALUES ($1) RETURNING id")
                .bind(number)
                .fetch_one(pool)
                .await;

        match inserted {
            Ok(id) => {
                tracing::debug!(number, id, "Semester created");
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(number, "Semester insert lost a race, re-fetching");
                match Self::find_id(pool, number).await? {
                    Some(id) => Ok(id),
                    None => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }
}
