//! Student record persistence
//!
//! Stores are keyed by normalized register number. Every write goes through
//! [`prepare_for_write`], which validates the record and lets the GPA engine
//! overwrite all derived fields, so a stored SGPA/CGPA is never a client value.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::core::gpa;
use crate::core::models::{normalize_register_no, Student, MAX_SEMESTERS, MIN_SEMESTERS};
use std::collections::HashSet;
use thiserror::Error;

/// Errors surfaced by a [`StudentStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this register number
    #[error("Student not found: {0}")]
    NotFound(String),
    /// A record with this register number already exists
    #[error("Student already exists: {0}")]
    Conflict(String),
    /// The record failed validation
    #[error("Invalid student record: {0}")]
    Invalid(String),
    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file is not a valid student document
    #[error("Failed to parse store file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The records could not be encoded
    #[error("Failed to serialize store file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persistence for student records
pub trait StudentStore {
    /// Look a record up by register number
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read
    fn find_by_key(&self, register_no: &str) -> Result<Option<Student>, StoreError>;

    /// Create a record; fails with [`StoreError::Conflict`] if the key exists
    ///
    /// # Errors
    /// Returns an error on a duplicate key, an invalid record, or a storage failure
    fn insert(&mut self, student: Student) -> Result<Student, StoreError>;

    /// Create or replace a record, returning what was stored
    ///
    /// # Errors
    /// Returns an error on an invalid record or a storage failure
    fn upsert(&mut self, student: Student) -> Result<Student, StoreError>;

    /// Remove a record with all its semesters and subjects
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read or written
    fn delete(&mut self, register_no: &str) -> Result<Option<Student>, StoreError>;

    /// Every record, in insertion order
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read
    fn list_all(&self) -> Result<Vec<Student>, StoreError>;

    /// Look a record up, treating absence as [`StoreError::NotFound`]
    ///
    /// # Errors
    /// Returns an error if the record is missing or storage cannot be read
    fn get(&self, register_no: &str) -> Result<Student, StoreError> {
        self.find_by_key(register_no)?
            .ok_or_else(|| StoreError::NotFound(normalize_register_no(register_no)))
    }
}

/// Validate a record and recompute its derived fields ahead of a write
///
/// Normalizes the register number, orders semesters by number and replaces every
/// grade point, SGPA and the CGPA with engine-computed values.
///
/// # Errors
/// Returns [`StoreError::Invalid`] when a required field is blank, a semester number
/// is out of range, above `total_semesters` or repeated, a subject code repeats within a semester, or a subject
/// has non-positive credits.
pub fn prepare_for_write(mut student: Student) -> Result<Student, StoreError> {
    student.register_no = normalize_register_no(&student.register_no);
    student.name = student.name.trim().to_string();
    student.section = student.section.trim().to_string();

    if student.register_no.is_empty() {
        return Err(StoreError::Invalid("register number is required".into()));
    }
    if student.name.is_empty() {
        return Err(StoreError::Invalid("name is required".into()));
    }
    if student.section.is_empty() {
        return Err(StoreError::Invalid("section is required".into()));
    }
    if !(MIN_SEMESTERS..=MAX_SEMESTERS).contains(&student.total_semesters) {
        return Err(StoreError::Invalid(format!(
            "total semesters must be between {MIN_SEMESTERS} and {MAX_SEMESTERS}, got {}",
            student.total_semesters
        )));
    }

    let mut seen_semesters = HashSet::new();
    for semester in &student.semesters {
        if !(MIN_SEMESTERS..=MAX_SEMESTERS).contains(&semester.semester_no) {
            return Err(StoreError::Invalid(format!(
                "semester number {} is out of range",
                semester.semester_no
            )));
        }
        if semester.semester_no > student.total_semesters {
            return Err(StoreError::Invalid(format!(
                "semester {} exceeds the declared total of {}",
                semester.semester_no, student.total_semesters
            )));
        }
        if !seen_semesters.insert(semester.semester_no) {
            return Err(StoreError::Invalid(format!(
                "semester {} appears more than once",
                semester.semester_no
            )));
        }

        let mut seen_codes = HashSet::new();
        for subject in &semester.subjects {
            if subject.code.trim().is_empty() {
                return Err(StoreError::Invalid(format!(
                    "semester {} has a subject without a code",
                    semester.semester_no
                )));
            }
            if !seen_codes.insert(subject.code.as_str()) {
                return Err(StoreError::Invalid(format!(
                    "subject {} appears more than once in semester {}",
                    subject.code, semester.semester_no
                )));
            }
            if !subject.credits.is_finite() || subject.credits <= 0.0 {
                return Err(StoreError::Invalid(format!(
                    "subject {} must have positive credits",
                    subject.code
                )));
            }
        }
    }

    student.semesters.sort_by_key(|s| s.semester_no);
    gpa::recompute(&mut student);
    Ok(student)
}
