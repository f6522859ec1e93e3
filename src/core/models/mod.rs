//! Data models for `cgpa-calc`

pub mod grade;
pub mod semester;
pub mod student;
pub mod subject;

pub use grade::{Grade, GRADES};
pub use semester::Semester;
pub use student::{normalize_register_no, Student, MAX_SEMESTERS, MIN_SEMESTERS};
pub use subject::{Subject, ARREAR_THRESHOLD};
