//! Resolution of a whole class context into row ids.

use portal_core::class_context::ClassContext;
use sqlx::SqlitePool;

use crate::models::class_context::ResolvedClass;
use crate::repositories::{BranchRepo, SectionRepo, SemesterRepo};

/// Walks the semester -> branch -> section chain.
pub struct ClassContextRepo;

impl ClassContextRepo {
    /// Materialize the chain, creating any missing rows.
    pub async fn resolve(
        pool: &SqlitePool,
        ctx: &ClassContext,
    ) -> Result<ResolvedClass, sqlx::Error> {
        let semester_id = SemesterRepo::resolve(pool, ctx.semester).await?;
        let branch_id = BranchRepo::resolve(pool, &ctx.branch).await?;
        let section_id = SectionRepo::resolve(pool, semester_id, branch_id, &ctx.section).await?;
        Ok(ResolvedClass {
            semester_id,
            branch_id,
            section_id,
        })
    }

    /// Look the chain up without creating anything.
    ///
    /// Returns `None` as soon as any link is missing.
    pub async fn find(
        pool: &SqlitePool,
        ctx: &ClassContext,
    ) -> Result<Option<ResolvedClass>, sqlx::Error> {
        let Some(semester_id) = SemesterRepo::find_id(pool, ctx.semester).await? else {
            return Ok(None);
        };
        let Some(branch_id) = BranchRepo::find_id(pool, &ctx.branch).await? else {
            return Ok(None);
        };
        let section_id = SectionRepo::find_id(pool, semester_id, branch_id, &ctx.section).await?;
        Ok(section_id.map(|section_id| ResolvedClass {
            semester_id,
            branch_id,
            section_id,
        }))
    }
}
