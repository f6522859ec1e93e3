//! Admin command handlers
//!
//! Listing, cohort statistics, deletion, seeding and report export.

use super::{confirm, fail};
use crate::args::AdminSubcommand;
use cgpa_calc::config::Config;
use cgpa_calc::core::gpa;
use cgpa_calc::core::models::Student;
use cgpa_calc::core::report::{ReportContext, ReportFormat};
use cgpa_calc::core::sample::demo_student;
use cgpa_calc::core::store::StudentStore;
use cgpa_calc::info;
use std::path::{Path, PathBuf};

/// Default report file name (extension added per format)
const REPORT_FILE_STEM: &str = "cgpa_student_records";

/// Dispatch admin subcommands
pub fn run<S: StudentStore>(subcommand: AdminSubcommand, store: &mut S, config: &Config) {
    let result = match subcommand {
        AdminSubcommand::List => list(store),
        AdminSubcommand::Stats => stats(store),
        AdminSubcommand::Delete { register_no, yes } => delete(store, &register_no, yes),
        AdminSubcommand::Seed => seed(store),
        AdminSubcommand::Report {
            format,
            output,
            title,
        } => report(store, &format, output.as_deref(), title.as_deref(), config),
    };

    if let Err(message) = result {
        fail(&message);
    }
}

fn load_all<S: StudentStore>(store: &S) -> Result<Vec<Student>, String> {
    store
        .list_all()
        .map_err(|e| format!("Failed to read student records: {e}"))
}

fn list<S: StudentStore>(store: &S) -> Result<(), String> {
    let students = load_all(store)?;
    if students.is_empty() {
        println!("No student records.");
        return Ok(());
    }

    println!(
        "{:<14} {:<24} {:<8} {:>6} {:>8}",
        "REG NO", "NAME", "SECTION", "CGPA", "ARREARS"
    );
    for student in &students {
        println!(
            "{:<14} {:<24} {:<8} {:>6.2} {:>8}",
            student.register_no,
            student.name,
            student.section,
            gpa::compute_student_cgpa(student),
            gpa::student_arrears(student).count
        );
    }
    Ok(())
}

fn stats<S: StudentStore>(store: &S) -> Result<(), String> {
    let stats = gpa::aggregate_cohort_statistics(&load_all(store)?);
    println!("\n=== Cohort Statistics ===\n");
    println!("  Total Students:        {}", stats.total_students);
    println!("  Students with Arrears: {}", stats.arrear_having_students);
    println!("  Highest CGPA:          {:.2}", stats.highest_cgpa);
    Ok(())
}

fn delete<S: StudentStore>(store: &mut S, register_no: &str, yes: bool) -> Result<(), String> {
    let student = store.get(register_no).map_err(|e| e.to_string())?;

    if !yes
        && !confirm(&format!(
            "Delete {} ({}) and all semester records?",
            student.name, student.register_no
        ))
    {
        println!("✗ Delete cancelled");
        return Ok(());
    }

    store
        .delete(&student.register_no)
        .map_err(|e| format!("Failed to delete {}: {e}", student.register_no))?;
    println!("✓ Deleted {}", student.register_no);
    Ok(())
}

fn seed<S: StudentStore>(store: &mut S) -> Result<(), String> {
    let stored = store.upsert(demo_student()).map_err(|e| e.to_string())?;
    println!(
        "✓ Seeded {} ({}), CGPA {:.2}",
        stored.name, stored.register_no, stored.cgpa
    );
    Ok(())
}

/// Where a report goes when `-o` is not given
fn default_report_path(reports_dir: &Path, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!("{REPORT_FILE_STEM}.{}", format.extension()))
}

fn report<S: StudentStore>(
    store: &S,
    format_str: &str,
    output: Option<&Path>,
    title: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let format: ReportFormat = format_str.parse()?;
    let mut ctx = ReportContext::from_students(&load_all(store)?);
    if let Some(title) = title {
        ctx = ctx.with_title(title);
    }

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_report_path(Path::new(&config.paths.reports_dir), format),
    };
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("Failed to create reports directory {}: {e}", parent.display())
            })?;
        }
    }

    format
        .reporter()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("Failed to write {format} report: {e}"))?;

    info!(
        "{format} report for {} students written to {}",
        ctx.stats.total_students,
        output_path.display()
    );
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}
