//! Student model

use super::{Semester, Subject};
use serde::{Deserialize, Serialize};

/// Lowest number of semesters a student can declare
pub const MIN_SEMESTERS: u8 = 1;

/// Highest number of semesters a student can declare
pub const MAX_SEMESTERS: u8 = 8;

/// A student's self-reported grade record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Full name
    pub name: String,

    /// Register number, the unique key (trimmed, uppercase)
    pub register_no: String,

    /// Class section (e.g., "A")
    pub section: String,

    /// Number of semesters the student reports on (1..=8)
    pub total_semesters: u8,

    /// Cumulative GPA. Derived from every semester's subjects, never trusted from input
    #[serde(default)]
    pub cgpa: f64,

    /// Semesters ordered by semester number
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

/// Normalize a register number into its key form
///
/// # Examples
/// ```
/// use cgpa_calc::core::models::normalize_register_no;
/// assert_eq!(normalize_register_no("  reg2024001 "), "REG2024001");
/// ```
#[must_use]
pub fn normalize_register_no(register_no: &str) -> String {
    register_no.trim().to_uppercase()
}

impl Student {
    /// Create a student record with no semesters yet
    #[must_use]
    pub fn new(name: String, register_no: &str, section: String, total_semesters: u8) -> Self {
        Self {
            name,
            register_no: normalize_register_no(register_no),
            section,
            total_semesters,
            cgpa: 0.0,
            semesters: Vec::new(),
        }
    }

    /// Iterate over every subject across all semesters
    pub fn all_subjects(&self) -> impl Iterator<Item = &Subject> {
        self.semesters.iter().flat_map(|sem| sem.subjects.iter())
    }

    /// Get a semester by number
    #[must_use]
    pub fn semester(&self, semester_no: u8) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.semester_no == semester_no)
    }

    /// Insert a semester, replacing any existing one with the same number
    ///
    /// Semesters stay ordered by semester number. Returns the stored semester.
    pub fn set_semester(&mut self, semester: Semester) -> &Semester {
        let idx = match self
            .semesters
            .binary_search_by_key(&semester.semester_no, |s| s.semester_no)
        {
            Ok(idx) => {
                self.semesters[idx] = semester;
                idx
            }
            Err(idx) => {
                self.semesters.insert(idx, semester);
                idx
            }
        };
        &self.semesters[idx]
    }

    /// Whether any semester holds graded subjects
    #[must_use]
    pub fn has_completed_semester(&self) -> bool {
        self.semesters.iter().any(Semester::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    fn semester(no: u8) -> Semester {
        Semester::new(
            no,
            vec![Subject::new(
                format!("S{no}"),
                "Subject".to_string(),
                3.0,
                Grade::A,
            )],
        )
    }

    #[test]
    fn test_register_no_is_normalized() {
        let student = Student::new("Asha".to_string(), " ec21b007 ", "B".to_string(), 4);
        assert_eq!(student.register_no, "EC21B007");
    }

    #[test]
    fn test_set_semester_keeps_order_and_replaces() {
        let mut student = Student::new("Asha".to_string(), "EC1", "B".to_string(), 4);
        student.set_semester(semester(3));
        student.set_semester(semester(1));
        student.set_semester(semester(2));

        let numbers: Vec<u8> = student.semesters.iter().map(|s| s.semester_no).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let mut replacement = semester(2);
        replacement.subjects.clear();
        student.set_semester(replacement);
        assert_eq!(student.semesters.len(), 3);
        assert!(!student.semester(2).unwrap().is_complete());
    }

    #[test]
    fn test_all_subjects_flattens() {
        let mut student = Student::new("Asha".to_string(), "EC1", "B".to_string(), 2);
        assert!(!student.has_completed_semester());
        student.set_semester(semester(1));
        student.set_semester(semester(2));
        assert_eq!(student.all_subjects().count(), 2);
        assert!(student.has_completed_semester());
    }
}
