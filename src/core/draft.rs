//! Grade-entry draft
//!
//! A student record is built in steps: personal details first, then grades for each
//! semester, then a result summary before saving. The in-progress record is an
//! explicit [`StudentDraft`] value handed from step to step.

use crate::core::curriculum;
use crate::core::gpa;
use crate::core::models::{Grade, Semester, Student, Subject, MAX_SEMESTERS, MIN_SEMESTERS};
use std::collections::HashMap;
use thiserror::Error;

/// Grades picked for a semester, keyed by subject code
pub type GradeSelection = HashMap<String, Grade>;

/// Validation failures while building a draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A required personal detail is blank
    #[error("Please fill in all fields: {0} is required")]
    MissingField(&'static str),
    /// Declared semester count outside 1..=8
    #[error("Total semesters must be between 1 and 8, got {0}")]
    TotalSemestersOutOfRange(u8),
    /// Grade entry for a semester the student did not declare
    #[error("Semester {semester_no} is outside 1..={total_semesters}")]
    SemesterOutOfRange {
        /// Requested semester
        semester_no: u8,
        /// Declared semester count
        total_semesters: u8,
    },
    /// Not every curriculum subject has a grade
    #[error("Please select grades for all subjects (missing: {})", .0.join(", "))]
    MissingGrades(Vec<String>),
    /// The same subject code was graded more than once
    #[error("Subject {0} was given more than one grade")]
    DuplicateSubject(String),
    /// A grade was given for a code that the semester does not offer
    #[error("Subject {code} is not offered in semester {semester_no}")]
    UnknownSubject {
        /// Offending subject code
        code: String,
        /// Semester being entered
        semester_no: u8,
    },
}

/// First wizard step: who the student is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalDetails {
    /// Full name
    pub name: String,
    /// Register number (normalized on validation)
    pub register_no: String,
    /// Class section
    pub section: String,
    /// Number of semesters to enter
    pub total_semesters: u8,
}

/// An unsaved student record moving through the wizard
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    student: Student,
}

impl StudentDraft {
    /// Validate personal details and start a draft
    ///
    /// # Errors
    /// Returns an error if a field is blank or the semester count is out of range.
    pub fn new(details: PersonalDetails) -> Result<Self, DraftError> {
        if details.name.trim().is_empty() {
            return Err(DraftError::MissingField("name"));
        }
        if details.register_no.trim().is_empty() {
            return Err(DraftError::MissingField("register number"));
        }
        if details.section.trim().is_empty() {
            return Err(DraftError::MissingField("section"));
        }
        if !(MIN_SEMESTERS..=MAX_SEMESTERS).contains(&details.total_semesters) {
            return Err(DraftError::TotalSemestersOutOfRange(details.total_semesters));
        }

        Ok(Self {
            student: Student::new(
                details.name.trim().to_string(),
                &details.register_no,
                details.section.trim().to_string(),
                details.total_semesters,
            ),
        })
    }

    /// Resume a draft from an existing record (e.g., to re-enter one semester)
    #[must_use]
    pub const fn from_student(student: Student) -> Self {
        Self { student }
    }

    /// Register number of the draft
    #[must_use]
    pub fn register_no(&self) -> &str {
        &self.student.register_no
    }

    /// Record grades for every curriculum subject of a semester
    ///
    /// Subjects are stored in curriculum order and the semester's SGPA is computed by
    /// the GPA engine. Entering a semester twice replaces the earlier entry.
    ///
    /// # Errors
    /// Returns an error if the semester is outside the declared range, two codes name
    /// the same subject once case is ignored, a code is not part of that semester, or
    /// any subject is missing a grade.
    pub fn enter_grades(
        &mut self,
        semester_no: u8,
        grades: &GradeSelection,
    ) -> Result<&Semester, DraftError> {
        let total_semesters = self.student.total_semesters;
        let offered = curriculum::semester_subjects(semester_no)
            .filter(|_| (1..=total_semesters).contains(&semester_no))
            .ok_or(DraftError::SemesterOutOfRange {
                semester_no,
                total_semesters,
            })?;

        let mut normalized: HashMap<String, Grade> = HashMap::with_capacity(grades.len());
        for (code, grade) in grades {
            let code = code.trim().to_uppercase();
            if normalized.insert(code.clone(), *grade).is_some() {
                return Err(DraftError::DuplicateSubject(code));
            }
        }

        if let Some(code) = normalized
            .keys()
            .find(|code| !offered.iter().any(|s| s.code == code.as_str()))
        {
            return Err(DraftError::UnknownSubject {
                code: code.clone(),
                semester_no,
            });
        }

        let missing: Vec<String> = offered
            .iter()
            .filter(|s| !normalized.contains_key(s.code))
            .map(|s| s.code.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DraftError::MissingGrades(missing));
        }

        let subjects = offered
            .iter()
            .map(|s| {
                Subject::new(
                    s.code.to_string(),
                    s.name.to_string(),
                    s.credits,
                    normalized[s.code],
                )
            })
            .collect();

        let mut semester = Semester::new(semester_no, subjects);
        semester.sgpa = gpa::compute_semester_sgpa(&semester);
        Ok(self.student.set_semester(semester))
    }

    /// Semesters in `1..=total_semesters` that have no grades yet
    #[must_use]
    pub fn pending_semesters(&self) -> Vec<u8> {
        (1..=self.student.total_semesters)
            .filter(|no| !self.student.semester(*no).is_some_and(Semester::is_complete))
            .collect()
    }

    /// Whether every declared semester has grades
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pending_semesters().is_empty()
    }

    /// CGPA preview over the semesters entered so far
    #[must_use]
    pub fn preview_cgpa(&self) -> f64 {
        gpa::compute_student_cgpa(&self.student)
    }

    /// Borrow the record being built
    #[must_use]
    pub const fn student(&self) -> &Student {
        &self.student
    }

    /// Finish the wizard, yielding the record to hand to a store
    #[must_use]
    pub fn into_student(mut self) -> Student {
        self.student.cgpa = gpa::compute_student_cgpa(&self.student);
        self.student
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(total_semesters: u8) -> PersonalDetails {
        PersonalDetails {
            name: "Meena".to_string(),
            register_no: " ec22a014".to_string(),
            section: "A".to_string(),
            total_semesters,
        }
    }

    fn all_grades(semester_no: u8, grade: Grade) -> GradeSelection {
        curriculum::semester_subjects(semester_no)
            .unwrap()
            .iter()
            .map(|s| (s.code.to_string(), grade))
            .collect()
    }

    #[test]
    fn test_new_validates_details() {
        let mut blank = details(2);
        blank.section = "  ".to_string();
        assert_eq!(
            StudentDraft::new(blank),
            Err(DraftError::MissingField("section"))
        );
        assert_eq!(
            StudentDraft::new(details(0)),
            Err(DraftError::TotalSemestersOutOfRange(0))
        );
        assert_eq!(
            StudentDraft::new(details(9)),
            Err(DraftError::TotalSemestersOutOfRange(9))
        );

        let draft = StudentDraft::new(details(2)).unwrap();
        assert_eq!(draft.register_no(), "EC22A014");
        assert_eq!(draft.pending_semesters(), vec![1, 2]);
    }

    #[test]
    fn test_enter_grades_requires_every_subject() {
        let mut draft = StudentDraft::new(details(1)).unwrap();
        let mut grades = all_grades(1, Grade::A);
        grades.remove("MA2122");
        grades.remove("PH2123");

        match draft.enter_grades(1, &grades) {
            Err(DraftError::MissingGrades(missing)) => {
                assert_eq!(missing, vec!["MA2122".to_string(), "PH2123".to_string()]);
            }
            other => panic!("expected missing grades, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_grades_rejects_foreign_codes() {
        let mut draft = StudentDraft::new(details(2)).unwrap();
        let mut grades = all_grades(1, Grade::A);
        grades.insert("EC2321".to_string(), Grade::B);

        assert_eq!(
            draft.enter_grades(1, &grades).unwrap_err(),
            DraftError::UnknownSubject {
                code: "EC2321".to_string(),
                semester_no: 1,
            }
        );
    }

    #[test]
    fn test_enter_grades_rejects_case_variant_duplicates() {
        let mut draft = StudentDraft::new(details(1)).unwrap();
        let mut grades = all_grades(1, Grade::A);
        grades.insert("ma2122".to_string(), Grade::O);

        assert_eq!(
            draft.enter_grades(1, &grades).unwrap_err(),
            DraftError::DuplicateSubject("MA2122".to_string())
        );
        assert!(draft.student().semesters.is_empty());
    }

    #[test]
    fn test_enter_grades_outside_declared_range() {
        let mut draft = StudentDraft::new(details(2)).unwrap();
        let grades = all_grades(3, Grade::A);
        assert_eq!(
            draft.enter_grades(3, &grades).unwrap_err(),
            DraftError::SemesterOutOfRange {
                semester_no: 3,
                total_semesters: 2,
            }
        );
    }

    #[test]
    fn test_full_wizard_flow() {
        let mut draft = StudentDraft::new(details(2)).unwrap();

        let sgpa = draft.enter_grades(1, &all_grades(1, Grade::O)).unwrap().sgpa;
        assert!((sgpa - 10.0).abs() < f64::EPSILON);
        assert!(!draft.is_complete());

        let lowercase: GradeSelection = all_grades(2, Grade::B)
            .into_iter()
            .map(|(code, g)| (code.to_lowercase(), g))
            .collect();
        draft.enter_grades(2, &lowercase).unwrap();
        assert!(draft.is_complete());

        // 23 credits at 10 and 24.5 credits at 6
        let expected = gpa::round2((23.0 * 10.0 + 24.5 * 6.0) / 47.5);
        assert!((draft.preview_cgpa() - expected).abs() < f64::EPSILON);

        let student = draft.into_student();
        assert!((student.cgpa - expected).abs() < f64::EPSILON);
        assert_eq!(student.semesters.len(), 2);
    }
}
