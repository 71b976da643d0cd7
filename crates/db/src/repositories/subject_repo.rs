//! Repository for the `subjects` table.

use portal_core::subject::ValidSubject;
use sqlx::SqlitePool;

use crate::models::subject::{CreateSubject, Subject};
use crate::repositories::{BranchRepo, SemesterRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, code, credits, semester_id, branch_id, created_at";

/// Subject inserts and per-class listings. No uniqueness is enforced.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a subject under already-resolved ids.
    pub async fn insert(pool: &SqlitePool, input: &CreateSubject) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (name, code, credits, semester_id, branch_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.credits)
            .bind(input.semester_id)
            .bind(input.branch_id)
            .fetch_one(pool)
            .await
    }

    /// Create a subject, resolving its semester and branch first.
    ///
    pub async fn create(pool: &SqlitePool, input: &ValidSubject) -> Result<Subject, sqlx::Error> {
        let semester_id = SemesterRepo::resolve(pool, input.semester).await?;
        let branch_id = BranchRepo::resolve(pool, &input.branch).await?;
        let subject = Self::insert(
            pool,
            &CreateSubject {
                name: input.name.clone(),
                code: input.code.clone(),
                credits: input.credits,
                semester_id,
                branch_id,
            },
        )
        .await?;
        tracing::debug!(id = subject.id, code = %subject.code, "Subject created");
        Ok(subject)
    }

    /// List subjects of a semester number and branch name, ordered by name.
    pub async fn list_for(
        pool: &SqlitePool,
        semester_number: i64,
        branch_name: &str,
    ) -> Result<Vec<Subject>, sqlx::Error> {
        sqlx::query_as::<_, Subject>(
            "SELECT sub.id, sub.name, sub.code, sub.credits, sub.semester_id, \
                    sub.branch_id, sub.created_at \
             FROM subjects sub \
             JOIN semesters sem ON sem.id = sub.semester_id \
             JOIN branches br ON br.id = sub.branch_id \
             WHERE sem.number = $1 AND br.name = $2 \
             ORDER BY sub.name, sub.id",
        )
        .bind(semester_number)
        .bind(branch_name)
        .fetch_all(pool)
        .await
    }
}
