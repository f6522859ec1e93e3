//! Semester model

use super::Subject;
use serde::{Deserialize, Serialize};

/// One semester of graded subjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester number (1..=8)
    pub semester_no: u8,

    /// Semester GPA. Derived from `subjects`, never trusted from input
    #[serde(default)]
    pub sgpa: f64,

    /// Graded subjects in entry order
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Semester {
    /// Create a semester with no computed SGPA yet
    #[must_use]
    pub const fn new(semester_no: u8, subjects: Vec<Subject>) -> Self {
        Self {
            semester_no,
            sgpa: 0.0,
            subjects,
        }
    }

    /// A semester is complete once it holds at least one graded subject
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.subjects.is_empty()
    }

    /// Total credits attempted in this semester
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.subjects.iter().map(|s| s.credits).sum()
    }

    /// Look up a subject by code
    #[must_use]
    pub fn subject(&self, code: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    #[test]
    fn test_subject_lookup_and_credits() {
        let semester = Semester::new(
            2,
            vec![
                Subject::new("HS2221".to_string(), "Communicative English".to_string(), 2.0, Grade::A),
                Subject::new(
                    "HS2281".to_string(),
                    "Communication and Soft Skills Laboratory".to_string(),
                    1.5,
                    Grade::O,
                ),
            ],
        );

        assert!(semester.is_complete());
        assert!((semester.total_credits() - 3.5).abs() < f64::EPSILON);
        assert_eq!(semester.subject("HS2281").map(|s| s.credits), Some(1.5));
        assert!(semester.subject("MA2122").is_none());
    }
}
