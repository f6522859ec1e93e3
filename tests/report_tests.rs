//! Integration tests for admin report export

use cgpa_calc::core::models::{Grade, Semester, Student, Subject};
use cgpa_calc::core::report::{ReportContext, ReportFormat, ReportGenerator};
use cgpa_calc::core::sample::demo_student;
use cgpa_calc::core::store::{MemoryStore, StudentStore};
use std::fs;
use tempfile::TempDir;

fn cohort() -> Vec<Student> {
    let mut store = MemoryStore::new();
    store.insert(demo_student()).unwrap();

    let mut struggling = Student::new("Ravi".to_string(), "ec21c7", "C".to_string(), 3);
    struggling.set_semester(Semester::new(
        3,
        vec![
            Subject::new("MA2321".to_string(), "Probability and Statistics".to_string(), 4.0, Grade::U),
            Subject::new("EC2321".to_string(), "Circuit Theory".to_string(), 3.0, Grade::A),
        ],
    ));
    store.insert(struggling).unwrap();

    store.list_all().unwrap()
}

#[test]
fn context_reflects_the_cohort() {
    let ctx = ReportContext::from_students(&cohort());

    assert_eq!(ctx.semester_columns, 3);
    assert_eq!(ctx.stats.total_students, 2);
    assert_eq!(ctx.stats.arrear_having_students, 1);
    assert!((ctx.stats.highest_cgpa - 7.88).abs() < f64::EPSILON);

    let ravi = &ctx.rows[1];
    assert_eq!(ravi.register_no, "EC21C7");
    assert_eq!(ravi.semesters[0].arrears, 0);
    assert_eq!(ravi.semesters[2].arrears, 1);
    // 24 / 7
    assert!((ravi.cgpa - 3.43).abs() < f64::EPSILON);
}

#[test]
fn every_format_writes_a_file() {
    let dir = TempDir::new().unwrap();
    let ctx = ReportContext::from_students(&cohort()).with_title("Batch 2021");

    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = dir.path().join(format!("report.{}", format.extension()));
        format.reporter().generate(&ctx, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Batch 2021"), "{format}");
        assert!(content.contains("EC21C7"), "{format}");
        assert!(content.contains("3.43"), "{format}");
    }
}
