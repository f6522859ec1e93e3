//! Import command handler
//!
//! Reads grade-sheet CSV files and upserts each student into the store.

use cgpa_calc::core::importer::parse_grade_sheet;
use cgpa_calc::core::store::StudentStore;
use cgpa_calc::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Import every file; failures are reported per file and make the run exit 1
pub fn run<S: StudentStore>(input_files: &[PathBuf], store: &mut S) {
    let failures = input_files
        .iter()
        .filter(|path| match import_file(path, store) {
            Ok(summary) => {
                println!("✓ {summary}");
                false
            }
            Err(e) => {
                error!("Import failed for {}: {e}", path.display());
                eprintln!("{e}");
                true
            }
        })
        .count();

    if failures > 0 {
        eprintln!("✗ {failures} of {} file(s) failed to import", input_files.len());
        std::process::exit(1);
    }
}

fn import_file<S: StudentStore>(path: &Path, store: &mut S) -> Result<String, String> {
    verbose!("Importing {}", path.display());
    let student = parse_grade_sheet(path)
        .map_err(|e| format!("✗ Failed to parse {}: {e}", path.display()))?;
    info!("Parsed grade sheet {} for {}", path.display(), student.register_no);

    let stored = store
        .upsert(student)
        .map_err(|e| format!("✗ Failed to save {}: {e}", path.display()))?;

    Ok(format!(
        "Imported {} ({}) from {}: {} semester(s), CGPA {:.2}",
        stored.name,
        stored.register_no,
        path.display(),
        stored.semesters.len(),
        stored.cgpa
    ))
}
