//! Repository for the `students` table, including roster import.

use portal_core::class_context::ClassContext;
use portal_core::roster::{plan_row, ImportSummary, RosterEntry, RowAction, RowOutcome};
use portal_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::class_context::ResolvedClass;
use crate::models::student::{CreateStudent, RosterLine, Student};
use crate::repositories::ClassContextRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, usn, name, semester_id, branch_id, section_id, updated_at";

/// Student lookups, inserts, renames, and roster reconciliation.
pub struct StudentRepo;

impl StudentRepo {
    /// Find the student with roll `usn` inside a resolved class.
    pub async fn find_in_class(
        pool: &SqlitePool,
        usn: &str,
        class: &ResolvedClass,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students \
             WHERE usn = $1 AND semester_id = $2 AND branch_id = $3 AND section_id = $4"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(usn)
            .bind(class.semester_id)
            .bind(class.branch_id)
            .bind(class.section_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new student, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (usn, name, semester_id, branch_id, section_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.usn)
            .bind(&input.name)
            .bind(input.semester_id)
            .bind(input.branch_id)
            .bind(input.section_id)
            .fetch_one(pool)
            .await
    }

    /// Replace a student's name and refresh `updated_at`.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update_name(pool: &SqlitePool, id: DbId, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students \
             SET name = $2, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now') \
             WHERE id = $1",
        )
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the roster of a class ordered by roll number.
    ///
    /// Matches on natural keys, so an unknown context yields an empty list.
    pub async fn list_for_class(
        pool: &SqlitePool,
        ctx: &ClassContext,
    ) -> Result<Vec<RosterLine>, sqlx::Error> {
        sqlx::query_as::<_, RosterLine>(
            "SELECT st.usn, st.name \
             FROM students st \
             JOIN semesters sem ON sem.id = st.semester_id \
             JOIN branches br ON br.id = st.branch_id \
             JOIN sections sec ON sec.id = st.section_id \
             WHERE sem.number = $1 AND br.name = $2 AND sec.name = $3 \
             ORDER BY st.usn",
        )
        .bind(ctx.semester)
        .bind(&ctx.branch)
        .bind(&ctx.section)
        .fetch_all(pool)
        .await
    }

    /// Reconcile a raw roster against the students of a class.
    ///
    /// The class chain is resolved first, once for the whole batch. Rows are
    /// then processed strictly in order and every write is awaited before the
    /// next lookup, so a roll repeated inside the batch is classified against
    /// the row its first occurrence just wrote. A store error aborts the batch;
    /// rows already written stay written.
    pub async fn import_roster(
        pool: &SqlitePool,
        ctx: &ClassContext,
        rows: &[serde_json::Value],
    ) -> Result<ImportSummary, sqlx::Error> {
        let class = ClassContextRepo::resolve(pool, ctx).await?;
        let mut summary = ImportSummary::default();

        for (index, raw) in rows.iter().enumerate() {
            let outcome = match RosterEntry::from_raw(raw) {
                Some(entry) => Self::apply_entry(pool, &class, &entry).await?,
                None => RowOutcome::Skipped,
            };
            tracing::debug!(row = index, %outcome, "Roster row reconciled");
            summary.record(outcome);
        }

        tracing::info!(
            class = %ctx,
            rows = rows.len(),
            added = summary.added,
            updated = summary.updated,
            skipped = summary.skipped,
            "Roster import complete"
        );
        Ok(summary)
    }

    async fn apply_entry(
        pool: &SqlitePool,
        class: &ResolvedClass,
        entry: &RosterEntry,
    ) -> Result<RowOutcome, sqlx::Error> {
        let existing = Self::find_in_class(pool, &entry.usn, class).await?;
        let action = plan_row(existing.as_ref().map(|s| s.name.as_str()), &entry.name);

        match (action, existing) {
            (RowAction::Insert, _) => {
                Self::create(
                    pool,
                    &CreateStudent {
                        usn: entry.usn.clone(),
                        name: entry.name.clone(),
                        semester_id: class.semester_id,
                        branch_id: class.branch_id,
                        section_id: class.section_id,
                    },
                )
                .await?;
            }
            (RowAction::Rename, Some(student)) => {
                Self::update_name(pool, student.id, &entry.name).await?;
            }
            (RowAction::Rename, None) | (RowAction::Unchanged, _) => {}
        }

        Ok(action.outcome())
    }
}
