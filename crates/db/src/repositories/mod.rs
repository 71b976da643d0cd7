//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod branch_repo;
pub mod class_context_repo;
pub mod section_repo;
pub mod semester_repo;
pub mod student_repo;
pub mod subject_repo;
pub mod usn_pattern_repo;

pub use branch_repo::BranchRepo;
pub use class_context_repo::ClassContextRepo;
pub use section_repo::SectionRepo;
pub use semester_repo::SemesterRepo;
pub use student_repo::StudentRepo;
pub use subject_repo::SubjectRepo;
pub use usn_pattern_repo::UsnPatternRepo;
