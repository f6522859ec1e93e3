//! Curriculum command handler

use super::fail;
use cgpa_calc::core::curriculum;
use cgpa_calc::core::models::{GRADES, MAX_SEMESTERS, MIN_SEMESTERS};

/// Print the curriculum (one semester or all) followed by the grade table
pub fn run(semester: Option<u8>) {
    let semesters = match semester {
        Some(no) if !(MIN_SEMESTERS..=MAX_SEMESTERS).contains(&no) => fail(&format!(
            "Semester must be between {MIN_SEMESTERS} and {MAX_SEMESTERS}, got {no}"
        )),
        Some(no) => no..=no,
        None => MIN_SEMESTERS..=MAX_SEMESTERS,
    };

    for no in semesters {
        let Some(subjects) = curriculum::semester_subjects(no) else {
            continue;
        };
        println!(
            "\n=== Semester {no} ({} credits) ===",
            curriculum::semester_credits(no)
        );
        for subject in subjects {
            println!("  {:<8} {:>4}  {}", subject.code, subject.credits, subject.name);
        }
    }

    println!("\n=== Grades ===");
    for grade in GRADES {
        println!("  {:<20} {:>4}", grade.label(), grade.points());
    }
}
