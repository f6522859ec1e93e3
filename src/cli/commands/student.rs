//! Student command handlers
//!
//! Registration, semester grade entry and the result summary.

use super::fail;
use crate::args::StudentSubcommand;
use cgpa_calc::core::draft::{GradeSelection, PersonalDetails, StudentDraft};
use cgpa_calc::core::gpa;
use cgpa_calc::core::models::{Grade, Student};
use cgpa_calc::core::store::{StoreError, StudentStore};
use cgpa_calc::{info, verbose};

/// Dispatch student subcommands
pub fn run<S: StudentStore>(subcommand: StudentSubcommand, store: &mut S) {
    let result = match subcommand {
        StudentSubcommand::Register {
            name,
            register_no,
            section,
            total_semesters,
        } => register(
            store,
            PersonalDetails {
                name,
                register_no,
                section,
                total_semesters,
            },
        ),
        StudentSubcommand::Grades {
            register_no,
            semester,
            grades,
        } => collect_grades(grades)
            .and_then(|grades| enter_grades(store, &register_no, semester, grades)),
        StudentSubcommand::Show { register_no } => show(store, &register_no),
    };

    if let Err(message) = result {
        fail(&message);
    }
}

fn register<S: StudentStore>(store: &mut S, details: PersonalDetails) -> Result<(), String> {
    let draft = StudentDraft::new(details).map_err(|e| e.to_string())?;
    let stored = store.insert(draft.into_student()).map_err(|e| match e {
        StoreError::Conflict(key) => {
            format!("Student {key} already exists; use `student grades` to update it")
        }
        other => other.to_string(),
    })?;

    println!(
        "✓ Registered {} ({}) for {} semester(s)",
        stored.name, stored.register_no, stored.total_semesters
    );
    Ok(())
}

/// Build the grade selection from repeated `--grade` pairs, refusing a code given twice
fn collect_grades(entries: Vec<(String, Grade)>) -> Result<GradeSelection, String> {
    let mut grades = GradeSelection::with_capacity(entries.len());
    for (code, grade) in entries {
        if let Some(previous) = grades.insert(code.clone(), grade) {
            return Err(format!("Subject {code} was graded twice ({previous} and {grade})"));
        }
    }
    Ok(grades)
}

fn enter_grades<S: StudentStore>(
    store: &mut S,
    register_no: &str,
    semester_no: u8,
    grades: GradeSelection,
) -> Result<(), String> {
    let student = store.get(register_no).map_err(|e| e.to_string())?;
    let mut draft = StudentDraft::from_student(student);

    let sgpa = draft
        .enter_grades(semester_no, &grades)
        .map_err(|e| e.to_string())?
        .sgpa;
    verbose!("Semester {semester_no} SGPA: {sgpa:.2}");

    let stored = store
        .upsert(draft.into_student())
        .map_err(|e| e.to_string())?;
    info!(
        "Semester {semester_no} saved for {} (SGPA {sgpa:.2})",
        stored.register_no
    );

    println!(
        "✓ Semester {semester_no} saved for {}: SGPA {sgpa:.2}, CGPA {:.2}",
        stored.register_no, stored.cgpa
    );
    let pending: Vec<String> = StudentDraft::from_student(stored)
        .pending_semesters()
        .iter()
        .map(u8::to_string)
        .collect();
    if !pending.is_empty() {
        println!("  Pending semesters: {}", pending.join(", "));
    }
    Ok(())
}

fn show<S: StudentStore>(store: &S, register_no: &str) -> Result<(), String> {
    let student = store.get(register_no).map_err(|e| e.to_string())?;
    print!("{}", result_summary(&student));
    Ok(())
}

/// Render the result summary shown after grade entry
///
/// SGPA and CGPA are taken from the engine rather than the stored fields.
pub fn result_summary(student: &Student) -> String {
    let mut out = format!(
        "\n=== Result Summary ===\n\n  Name:        {}\n  Register No: {}\n  Section:     {}\n\n",
        student.name, student.register_no, student.section
    );

    if student.semesters.is_empty() {
        out.push_str("  No semesters entered yet.\n");
    }
    for semester in &student.semesters {
        let arrears = gpa::classify_arrears(&semester.subjects).count;
        out.push_str(&format!(
            "  Semester {}: SGPA {:.2} ({} credits, {arrears} arrear(s))\n",
            semester.semester_no,
            gpa::compute_semester_sgpa(semester),
            semester.total_credits()
        ));
    }

    let cgpa = gpa::compute_student_cgpa(student);
    out.push_str(&format!(
        "\n  CGPA: {cgpa:.2}\n  {}\n",
        gpa::performance_remark(cgpa)
    ));
    out
}
