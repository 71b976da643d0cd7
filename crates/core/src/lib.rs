//! Domain logic for the academic records portal.
//!
//! Everything in this crate is pure: no database, no async, no I/O. The
//! `db` crate persists what these modules decide, and the `api` crate maps
//! their errors onto HTTP responses.

pub mod cie;
pub mod class_context;
pub mod error;
pub mod roster;
pub mod subject;
pub mod types;
pub mod usn_pattern;
