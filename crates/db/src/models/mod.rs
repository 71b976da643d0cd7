//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, where the entity has one

pub mod branch;
pub mod class_context;
pub mod section;
pub mod semester;
pub mod student;
pub mod subject;
pub mod usn_pattern;
