//! Integration tests for lazy creation of the class hierarchy.
//!
//! - Resolving the same natural key twice yields one row
//! - Distinct keys yield distinct rows
//! - Concurrent resolves of a new key converge on one row
//! - The read-only lookup never inserts
//! - Listings are ordered and degrade to empty on unknown context

use portal_core::class_context::ClassContext;
use portal_db::is_unique_violation;
use portal_db::repositories::{BranchRepo, ClassContextRepo, SectionRepo, SemesterRepo};
use sqlx::SqlitePool;

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: Idempotence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_semester_resolve_is_idempotent(pool: SqlitePool) {
    let first = SemesterRepo::resolve(&pool, 5).await.unwrap();
    let second = SemesterRepo::resolve(&pool, 5).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(count(&pool, "semesters").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_branch_resolve_is_idempotent(pool: SqlitePool) {
    let first = BranchRepo::resolve(&pool, "CSE").await.unwrap();
    let second = BranchRepo::resolve(&pool, "CSE").await.unwrap();
    let other = BranchRepo::resolve(&pool, "ECE").await.unwrap();
    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(count(&pool, "branches").await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_section_scoped_to_semester_and_branch(pool: SqlitePool) {
    let sem5 = SemesterRepo::resolve(&pool, 5).await.unwrap();
    let sem6 = SemesterRepo::resolve(&pool, 6).await.unwrap();
    let cse = BranchRepo::resolve(&pool, "CSE").await.unwrap();

    let a5 = SectionRepo::resolve(&pool, sem5, cse, "A").await.unwrap();
    let a5_again = SectionRepo::resolve(&pool, sem5, cse, "A").await.unwrap();
    let a6 = SectionRepo::resolve(&pool, sem6, cse, "A").await.unwrap();

    assert_eq!(a5, a5_again);
    assert_ne!(a5, a6);
    assert_eq!(count(&pool, "sections").await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_class_context_resolve_is_idempotent(pool: SqlitePool) {
    let ctx = ClassContext::new(5, "CSE", "A").unwrap();
    let first = ClassContextRepo::resolve(&pool, &ctx).await.unwrap();
    let second = ClassContextRepo::resolve(&pool, &ctx).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(count(&pool, "semesters").await, 1);
    assert_eq!(count(&pool, "branches").await, 1);
    assert_eq!(count(&pool, "sections").await, 1);
}

// ---------------------------------------------------------------------------
// Test: Read-only lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_find_does_not_insert(pool: SqlitePool) {
    let ctx = ClassContext::new(3, "MECH", "B").unwrap();
    assert_eq!(ClassContextRepo::find(&pool, &ctx).await.unwrap(), None);
    assert_eq!(count(&pool, "semesters").await, 0);
    assert_eq!(count(&pool, "branches").await, 0);

    let resolved = ClassContextRepo::resolve(&pool, &ctx).await.unwrap();
    assert_eq!(
        ClassContextRepo::find(&pool, &ctx).await.unwrap(),
        Some(resolved)
    );
}

// ---------------------------------------------------------------------------
// Test: Storage backstop and races
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_semester_insert_is_unique_violation(pool: SqlitePool) {
    SemesterRepo::resolve(&pool, 1).await.unwrap();
    let err = sqlx::query("INSERT INTO semesters (number) VALUES (1)")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_resolves_share_one_row(pool: SqlitePool) {
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move { SemesterRepo::resolve(&pool, 9).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }

    assert!(ids.iter().all(|id| *id == ids[0]));
    assert_eq!(count(&pool, "semesters").await, 1);
    assert_eq!(SemesterRepo::find_id(&pool, 9).await.unwrap(), Some(ids[0]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_class_resolves_share_one_chain(pool: SqlitePool) {
    let ctx = ClassContext::new(4, "EEE", "C").unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pool = pool.clone();
            let ctx = ctx.clone();
            tokio::spawn(async move { ClassContextRepo::resolve(&pool, &ctx).await })
        })
        .collect();

    let mut resolved = Vec::new();
    for handle in handles {
        resolved.push(handle.await.unwrap().unwrap());
    }

    assert!(resolved.iter().all(|r| *r == resolved[0]));
    assert_eq!(count(&pool, "branches").await, 1);
    assert_eq!(count(&pool, "sections").await, 1);
}

// ---------------------------------------------------------------------------
// Test: Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_lists_are_ordered(pool: SqlitePool) {
    for n in [7, 2, 5] {
        SemesterRepo::resolve(&pool, n).await.unwrap();
    }
    for name in ["ISE", "CSE", "ECE"] {
        BranchRepo::resolve(&pool, name).await.unwrap();
    }

    let numbers: Vec<i64> = SemesterRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.number)
        .collect();
    assert_eq!(numbers, vec![2, 5, 7]);

    let names: Vec<String> = BranchRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["CSE", "ECE", "ISE"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sections_listed_by_name_for_their_class(pool: SqlitePool) {
    for section in ["C", "A", "B"] {
        let ctx = ClassContext::new(5, "CSE", section).unwrap();
        ClassContextRepo::resolve(&pool, &ctx).await.unwrap();
    }
    let other = ClassContext::new(5, "ECE", "Z").unwrap();
    ClassContextRepo::resolve(&pool, &other).await.unwrap();

    let names: Vec<String> = SectionRepo::list_for(&pool, 5, "CSE")
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sections_for_unknown_branch_is_empty(pool: SqlitePool) {
    let ctx = ClassContext::new(5, "CSE", "A").unwrap();
    ClassContextRepo::resolve(&pool, &ctx).await.unwrap();

    assert!(SectionRepo::list_for(&pool, 5, "NOPE").await.unwrap().is_empty());
    assert!(SectionRepo::list_for(&pool, 99, "CSE").await.unwrap().is_empty());
}
