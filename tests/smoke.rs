//! Integration smoke tests for `cgpa_calc`

use cgpa_calc::core::gpa::performance_remark;
use cgpa_calc::core::sample::demo_student;
use cgpa_calc::get_version;

#[test]
fn version_is_not_empty() {
    assert!(!get_version().trim().is_empty());
}

#[test]
fn demo_student_is_excellent() {
    let student = demo_student();
    assert_eq!(performance_remark(student.cgpa), "Excellent!");
}
