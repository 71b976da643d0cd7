pub mod marks;
pub mod reference;
pub mod students;
pub mod subjects;
pub mod templates;
pub mod usn_patterns;
