//! Demo student record for seeding a store

use crate::core::gpa;
use crate::core::models::{Grade, Semester, Student, Subject};

fn subject(code: &str, name: &str, credits: f64, grade: Grade) -> Subject {
    Subject::new(code.to_string(), name.to_string(), credits, grade)
}

/// A two-semester record (REG2024001) with SGPA/CGPA already computed
#[must_use]
pub fn demo_student() -> Student {
    let mut student = Student::new("John Doe".to_string(), "REG2024001", "A".to_string(), 2);

    student.set_semester(Semester::new(
        1,
        vec![
            subject("MA8151", "Engineering Mathematics I", 4.0, Grade::A),
            subject("PH8151", "Engineering Physics", 3.0, Grade::BPlus),
            subject("CY8151", "Engineering Chemistry", 3.0, Grade::A),
            subject(
                "GE8151",
                "Problem Solving and Python Programming",
                3.0,
                Grade::APlus,
            ),
            subject("GE8152", "Engineering Graphics", 4.0, Grade::B),
        ],
    ));
    student.set_semester(Semester::new(
        2,
        vec![
            subject("MA8251", "Engineering Mathematics II", 4.0, Grade::APlus),
            subject("PH8251", "Applied Physics", 3.0, Grade::A),
            subject("CY8251", "Engineering Chemistry II", 3.0, Grade::APlus),
            subject("EE8251", "Electric Circuit Analysis", 4.0, Grade::A),
            subject("ME8251", "Engineering Mechanics", 3.0, Grade::BPlus),
        ],
    ));

    gpa::recompute(&mut student);
    student
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_student_figures() {
        let student = demo_student();
        // 128/17 and 140/17
        assert!((student.semesters[0].sgpa - 7.53).abs() < f64::EPSILON);
        assert!((student.semesters[1].sgpa - 8.24).abs() < f64::EPSILON);
        // 268/34
        assert!((student.cgpa - 7.88).abs() < f64::EPSILON);
    }
}
