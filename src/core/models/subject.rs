//! Subject model

use super::Grade;
use serde::{Deserialize, Serialize};

/// Grade point below which a subject counts as an arrear
pub const ARREAR_THRESHOLD: f64 = 5.0;

/// A graded subject within a semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject code, unique within a semester (e.g., "MA2122")
    pub code: String,

    /// Subject name (e.g., "Calculus for Engineers")
    pub name: String,

    /// Credits (can be fractional, must be positive)
    pub credits: f64,

    /// Awarded grade
    pub grade: Grade,

    /// Grade point for `grade`; recomputed from the grade on every store write
    pub grade_point: f64,
}

impl Subject {
    /// Create a graded subject, deriving the grade point from the grade
    #[must_use]
    pub fn new(code: String, name: String, credits: f64, grade: Grade) -> Self {
        Self {
            code,
            name,
            credits,
            grade,
            grade_point: grade.points(),
        }
    }

    /// Whether this subject must be re-examined
    #[must_use]
    pub fn is_arrear(&self) -> bool {
        self.grade_point < ARREAR_THRESHOLD
    }

    /// Credit-weighted grade points (`credits * grade_point`)
    #[must_use]
    pub fn weighted_points(&self) -> f64 {
        self.credits * self.grade_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_creation() {
        let subject = Subject::new(
            "MA2122".to_string(),
            "Calculus for Engineers".to_string(),
            4.0,
            Grade::A,
        );

        assert_eq!(subject.code, "MA2122");
        assert!((subject.grade_point - 8.0).abs() < f64::EPSILON);
        assert!((subject.weighted_points() - 32.0).abs() < f64::EPSILON);
        assert!(!subject.is_arrear());
    }

    #[test]
    fn test_arrear_threshold() {
        let c = Subject::new("X1".to_string(), "X".to_string(), 3.0, Grade::C);
        let d = Subject::new("X2".to_string(), "X".to_string(), 3.0, Grade::D);
        let u = Subject::new("X3".to_string(), "X".to_string(), 3.0, Grade::U);

        assert!(!c.is_arrear());
        assert!(d.is_arrear());
        assert!(u.is_arrear());
    }
}
