//! GPA engine: credit-weighted averaging and cohort statistics
//!
//! Every SGPA, CGPA and cohort figure in the crate comes from this module. The
//! grade-entry draft, the store (on every write) and the admin reports all call the
//! same functions, so a CGPA previewed before saving equals the one persisted and the
//! one reported.
//!
//! Rounding happens exactly once, on the final quotient, via [`round2`].

use crate::core::models::{Semester, Student, Subject};

/// A (credits, grade point) pair fed to [`weighted_average`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditPoint {
    /// Credit weight (expected to be positive)
    pub credits: f64,
    /// Grade point on the 10-point scale
    pub grade_point: f64,
}

impl CreditPoint {
    /// Create a new credit/grade-point pair
    #[must_use]
    pub const fn new(credits: f64, grade_point: f64) -> Self {
        Self {
            credits,
            grade_point,
        }
    }
}

impl From<&Subject> for CreditPoint {
    fn from(subject: &Subject) -> Self {
        Self::new(subject.credits, subject.grade_point)
    }
}

/// Arrear count for a collection of subjects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrearSummary {
    /// Number of subjects with a grade point below the arrear threshold
    pub count: usize,
}

/// Statistics across every student record
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CohortStatistics {
    /// Number of student records
    pub total_students: usize,
    /// Students with at least one arrear anywhere in their record
    pub arrear_having_students: usize,
    /// Highest CGPA among students with a completed semester (0 when none)
    pub highest_cgpa: f64,
}

/// Round to two decimal places, halves away from zero
///
/// The rule is applied to the binary value of `value * 100`, so a decimal tie that
/// is not exactly representable rounds by its actual binary value.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted average of grade points, rounded to two decimals
///
/// Returns `0.0` for an empty sequence or when the credits do not sum to a
/// positive total.
///
/// # Examples
/// ```
/// use cgpa_calc::core::gpa::{weighted_average, CreditPoint};
///
/// let items = [CreditPoint::new(4.0, 8.0), CreditPoint::new(3.0, 7.0)];
/// assert_eq!(weighted_average(items), 7.57);
/// assert_eq!(weighted_average(Vec::<CreditPoint>::new()), 0.0);
/// ```
#[must_use]
pub fn weighted_average<I>(items: I) -> f64
where
    I: IntoIterator<Item = CreditPoint>,
{
    let (total_credits, weighted_sum) = items
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(credits, sum), item| {
            (credits + item.credits, sum + item.credits * item.grade_point)
        });

    if total_credits <= 0.0 {
        return 0.0;
    }

    round2(weighted_sum / total_credits)
}

/// Sum of `credits * grade_point` over the subjects
#[must_use]
pub fn weighted_points<'a, I>(subjects: I) -> f64
where
    I: IntoIterator<Item = &'a Subject>,
{
    subjects.into_iter().map(Subject::weighted_points).sum()
}

/// SGPA for one semester
#[must_use]
pub fn compute_semester_sgpa(semester: &Semester) -> f64 {
    weighted_average(semester.subjects.iter().map(CreditPoint::from))
}

/// CGPA for a student, recombined at subject level across every semester
///
/// This is not an average of the stored SGPAs: each subject is weighted by its own
/// credits, so semesters with different credit totals weigh in correctly and no
/// per-semester rounding leaks into the result.
#[must_use]
pub fn compute_student_cgpa(student: &Student) -> f64 {
    weighted_average(student.all_subjects().map(CreditPoint::from))
}

/// Count arrears in a collection of subjects
#[must_use]
pub fn classify_arrears<'a, I>(subjects: I) -> ArrearSummary
where
    I: IntoIterator<Item = &'a Subject>,
{
    ArrearSummary {
        count: subjects.into_iter().filter(|s| s.is_arrear()).count(),
    }
}

/// Count arrears across a student's whole record
#[must_use]
pub fn student_arrears(student: &Student) -> ArrearSummary {
    classify_arrears(student.all_subjects())
}

/// Aggregate counts and the highest CGPA across student records
///
/// Students without a completed semester are counted but are not CGPA candidates.
#[must_use]
pub fn aggregate_cohort_statistics(students: &[Student]) -> CohortStatistics {
    let arrear_having_students = students
        .iter()
        .filter(|s| student_arrears(s).count > 0)
        .count();

    let highest_cgpa = students
        .iter()
        .filter(|s| s.has_completed_semester())
        .map(compute_student_cgpa)
        .fold(0.0_f64, f64::max);

    CohortStatistics {
        total_students: students.len(),
        arrear_having_students,
        highest_cgpa,
    }
}

/// Overwrite every derived field of a student record
///
/// Grade points are re-derived from grade labels, then each SGPA and the CGPA are
/// recomputed. Values submitted by a client are discarded.
pub fn recompute(student: &mut Student) {
    for semester in &mut student.semesters {
        for subject in &mut semester.subjects {
            subject.grade_point = subject.grade.points();
        }
        semester.sgpa = compute_semester_sgpa(semester);
    }
    student.cgpa = compute_student_cgpa(student);
}

/// Short remark shown next to a CGPA
#[must_use]
pub fn performance_remark(cgpa: f64) -> &'static str {
    if cgpa >= 7.5 {
        "Excellent!"
    } else {
        "Keep improving!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    fn subject(code: &str, credits: f64, grade: Grade) -> Subject {
        Subject::new(code.to_string(), code.to_string(), credits, grade)
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert!((round2(7.529_411) - 7.53).abs() < f64::EPSILON);
        assert!((round2(0.125) - 0.13).abs() < f64::EPSILON);
        assert!((round2(-0.125) + 0.13).abs() < f64::EPSILON);
        assert!((round2(9.0) - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_average_single_item() {
        let avg = weighted_average([CreditPoint::new(3.0, 9.0)]);
        assert!((avg - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_total_credits_yield_zero() {
        let avg = weighted_average([CreditPoint::new(-2.0, 9.0)]);
        assert!(avg.abs() < f64::EPSILON);
    }

    #[test]
    fn test_recompute_discards_submitted_values() {
        let mut semester = Semester::new(1, vec![subject("A1", 4.0, Grade::O)]);
        semester.sgpa = 3.3;
        semester.subjects[0].grade_point = 1.0;

        let mut student = Student::new("Ravi".to_string(), "r1", "C".to_string(), 1);
        student.semesters.push(semester);
        student.cgpa = 99.0;

        recompute(&mut student);

        assert!((student.semesters[0].subjects[0].grade_point - 10.0).abs() < f64::EPSILON);
        assert!((student.semesters[0].sgpa - 10.0).abs() < f64::EPSILON);
        assert!((student.cgpa - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_points() {
        let subjects = [subject("A", 4.0, Grade::A), subject("B", 1.5, Grade::O)];
        assert!((weighted_points(&subjects) - 47.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_performance_remark_boundary() {
        assert_eq!(performance_remark(7.5), "Excellent!");
        assert_eq!(performance_remark(7.49), "Keep improving!");
    }
}
