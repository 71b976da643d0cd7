//! Repository for the `usn_patterns` table.

use sqlx::SqlitePool;

use crate::models::usn_pattern::{CreateUsnPattern, UsnPattern};

pub struct UsnPatternRepo;

impl UsnPatternRepo {
    /// Register a new, active pattern.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateUsnPattern,
    ) -> Result<UsnPattern, sqlx::Error> {
        sqlx::query_as::<_, UsnPattern>(
            "INSERT INTO usn_patterns (pattern_text, description) \
             VALUES ($1, $2) \
             RETURNING id, pattern_text, description, active",
        )
        .bind(&input.pattern_text)
        .bind(&input.description)
        .fetch_one(pool)
        .await
    }

    /// List active patterns in registration order.
    pub async fn list_active(pool: &SqlitePool) -> Result<Vec<UsnPattern>, sqlx::Error> {
        sqlx::query_as::<_, UsnPattern>(
            "SELECT id, pattern_text, description, active \
             FROM usn_patterns WHERE active = 1 ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
