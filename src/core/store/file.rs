//! TOML file-backed student store
//!
//! The whole store is one TOML document:
//!
//! ```toml
//! [[students]]
//! name = "John Doe"
//! register_no = "REG2024001"
//! section = "A"
//! total_semesters = 2
//! cgpa = 7.88
//!
//! [[students.semesters]]
//! semester_no = 1
//! sgpa = 7.53
//!
//! [[students.semesters.subjects]]
//! code = "MA8151"
//! name = "Engineering Mathematics I"
//! credits = 4.0
//! grade = "A"
//! grade_point = 8.0
//! ```
//!
//! Each call reads the file fresh; writes replace it through a temporary file, so
//! concurrent writers resolve as last-writer-wins. The stored `grade_point`, `sgpa`
//! and `cgpa` values are recomputed on load, so a hand-edited file cannot surface
//! figures the engine did not produce.

use super::{prepare_for_write, StoreError, StudentStore};
use crate::core::gpa;
use crate::core::models::{normalize_register_no, Student};
use crate::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    students: Vec<Student>,
}

/// Student store persisted to a TOML file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`; the file is created on first write
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Student>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let document: StoreDocument = toml::from_str(&content)?;
        Ok(document
            .students
            .into_iter()
            .map(|mut student| {
                gpa::recompute(&mut student);
                student
            })
            .collect())
    }

    fn save(&self, students: Vec<Student>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let count = students.len();
        let content = toml::to_string_pretty(&StoreDocument { students })?;
        let tmp_path = self.path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("Wrote {count} student records to {}", self.path.display());
        Ok(())
    }
}

impl StudentStore for FileStore {
    fn find_by_key(&self, register_no: &str) -> Result<Option<Student>, StoreError> {
        let key = normalize_register_no(register_no);
        Ok(self.load()?.into_iter().find(|s| s.register_no == key))
    }

    fn insert(&mut self, student: Student) -> Result<Student, StoreError> {
        let student =
            prepare_for_write(student).inspect_err(|e| warn!("Rejected insert: {e}"))?;
        let mut students = self.load()?;
        if students.iter().any(|s| s.register_no == student.register_no) {
            warn!("Rejected insert: {} already exists", student.register_no);
            return Err(StoreError::Conflict(student.register_no));
        }
        students.push(student.clone());
        self.save(students)?;
        info!("Created student record {}", student.register_no);
        Ok(student)
    }

    fn upsert(&mut self, student: Student) -> Result<Student, StoreError> {
        let student =
            prepare_for_write(student).inspect_err(|e| warn!("Rejected save: {e}"))?;
        let mut students = self.load()?;
        match students
            .iter_mut()
            .find(|s| s.register_no == student.register_no)
        {
            Some(existing) => *existing = student.clone(),
            None => students.push(student.clone()),
        }
        self.save(students)?;
        info!(
            "Saved student record {} (CGPA {:.2})",
            student.register_no, student.cgpa
        );
        Ok(student)
    }

    fn delete(&mut self, register_no: &str) -> Result<Option<Student>, StoreError> {
        let key = normalize_register_no(register_no);
        let mut students = self.load()?;
        let Some(idx) = students.iter().position(|s| s.register_no == key) else {
            return Ok(None);
        };
        let removed = students.remove(idx);
        self.save(students)?;
        info!("Deleted student record {key}");
        Ok(Some(removed))
    }

    fn list_all(&self) -> Result<Vec<Student>, StoreError> {
        self.load()
    }
}
