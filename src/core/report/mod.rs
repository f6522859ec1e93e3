//! Report generation for student records
//!
//! This module turns stored records into the admin view: one row per student with
//! per-semester arrear count, weighted total and SGPA, the overall CGPA, and cohort
//! statistics. Every number is produced by [`crate::core::gpa`]; renderers only format.

pub mod formats;

use crate::core::gpa::{self, CohortStatistics};
use crate::core::models::Student;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Default report title
pub const DEFAULT_TITLE: &str = "CGPA Student Records";

/// Figures for one semester column of a student row
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SemesterCell {
    /// Subjects with a grade point below 5
    pub arrears: usize,
    /// Sum of `credits * grade_point`
    pub weighted_points: f64,
    /// SGPA recomputed from the subjects
    pub sgpa: f64,
}

/// One student's line in the admin report
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    /// Student name
    pub name: String,
    /// Class section
    pub section: String,
    /// Register number
    pub register_no: String,
    /// Cells for semesters `1..=n`; absent semesters are all zeros
    pub semesters: Vec<SemesterCell>,
    /// CGPA over every subject
    pub cgpa: f64,
    /// Arrears across the whole record
    pub total_arrears: usize,
}

impl StudentRow {
    /// Build a row with `semester_columns` semester cells
    #[must_use]
    pub fn from_student(student: &Student, semester_columns: u8) -> Self {
        let semesters = (1..=semester_columns)
            .map(|no| {
                student
                    .semester(no)
                    .map_or_else(SemesterCell::default, |sem| SemesterCell {
                        arrears: gpa::classify_arrears(&sem.subjects).count,
                        weighted_points: gpa::weighted_points(&sem.subjects),
                        sgpa: gpa::compute_semester_sgpa(sem),
                    })
            })
            .collect();

        Self {
            name: student.name.clone(),
            section: student.section.clone(),
            register_no: student.register_no.clone(),
            semesters,
            cgpa: gpa::compute_student_cgpa(student),
            total_arrears: gpa::student_arrears(student).count,
        }
    }
}

/// Data context for report generation
///
/// Aggregates everything a renderer needs so each format reads from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    /// Report heading
    pub title: String,
    /// Cohort statistics
    pub stats: CohortStatistics,
    /// One row per student, in store order
    pub rows: Vec<StudentRow>,
    /// Number of semester column groups
    pub semester_columns: u8,
}

impl ReportContext {
    /// Build the context for a set of student records
    ///
    /// The number of semester columns is the largest declared or recorded semester
    /// across all students.
    #[must_use]
    pub fn from_students(students: &[Student]) -> Self {
        let semester_columns = students
            .iter()
            .flat_map(|s| {
                std::iter::once(s.total_semesters)
                    .chain(s.semesters.iter().map(|sem| sem.semester_no))
            })
            .max()
            .unwrap_or(0);

        Self {
            title: DEFAULT_TITLE.to_string(),
            stats: gpa::aggregate_cohort_statistics(students),
            rows: students
                .iter()
                .map(|s| StudentRow::from_student(s, semester_columns))
                .collect(),
            semester_columns,
        }
    }

    /// Replace the report title
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
