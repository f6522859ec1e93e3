//! CSV parser for student grade sheets
//!
//! A grade sheet carries a short metadata header followed by a `Grades` section:
//!
//! ```text
//! Name,John Doe
//! Register No,reg2024001
//! Section,A
//! Total Semesters,2
//!
//! Grades
//! Semester,Code,Grade
//! 1,HS2121,A
//! 1,MA2122,O
//! 2,HS2221,B+
//! ```
//!
//! `Name` and `Credits` columns are optional; when absent they come from the
//! curriculum table.

use crate::core::curriculum;
use crate::core::gpa;
use crate::core::models::{Grade, Semester, Student, Subject};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Student details read from the grade-sheet header
#[derive(Debug, Clone, Default)]
pub struct SheetMetadata {
    /// Student name
    pub name: String,
    /// Register number as written in the sheet
    pub register_no: String,
    /// Class section
    pub section: String,
    /// Declared semester count
    pub total_semesters: u8,
}

/// Parse a grade-sheet CSV file into a student record
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// A `Student` with every semester and subject from the sheet, SGPA/CGPA computed
///
/// # Errors
/// Returns an error if the file cannot be read or the sheet is malformed
pub fn parse_grade_sheet<P: AsRef<Path>>(path: P) -> Result<Student, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_grade_sheet_str(&content)
}

/// Parse grade-sheet CSV content into a student record
///
/// # Errors
/// Returns an error if metadata is missing, the `Grades` section or its header is
/// absent, or any grade row is invalid
pub fn parse_grade_sheet_str(content: &str) -> Result<Student, Box<dyn Error>> {
    let lines: Vec<&str> = content.lines().collect();

    let grades_start = lines
        .iter()
        .position(|line| {
            parse_csv_line(line)
                .first()
                .is_some_and(|first| first.eq_ignore_ascii_case("grades"))
        })
        .ok_or("No 'Grades' section found in CSV")?;

    let metadata = parse_metadata(&lines[..grades_start])?;

    let header_line = lines
        .get(grades_start + 1)
        .ok_or("No grade header found")?;
    let headers = parse_csv_line(header_line);
    for required in ["Semester", "Code", "Grade"] {
        if column_index(&headers, required).is_none() {
            return Err(format!("Grade header is missing the '{required}' column").into());
        }
    }

    let mut semesters: BTreeMap<u8, Vec<Subject>> = BTreeMap::new();
    for (offset, line) in lines.iter().enumerate().skip(grades_start + 2) {
        if line.trim().is_empty() {
            continue;
        }
        let (semester_no, subject) = parse_grade_line(line, &headers)
            .map_err(|e| format!("Line {}: {e}", offset + 1))?;
        if !(1..=metadata.total_semesters).contains(&semester_no) {
            return Err(format!(
                "Line {}: Semester {semester_no} is outside Total Semesters {}",
                offset + 1,
                metadata.total_semesters
            )
            .into());
        }
        semesters.entry(semester_no).or_default().push(subject);
    }

    let mut student = Student::new(
        metadata.name,
        &metadata.register_no,
        metadata.section,
        metadata.total_semesters,
    );
    for (semester_no, subjects) in semesters {
        student.set_semester(Semester::new(semester_no, subjects));
    }
    gpa::recompute(&mut student);

    Ok(student)
}

/// Parse the metadata header lines
fn parse_metadata(lines: &[&str]) -> Result<SheetMetadata, Box<dyn Error>> {
    let mut metadata = SheetMetadata::default();

    for line in lines {
        let parts = parse_csv_line(line);
        if parts.len() < 2 {
            continue;
        }

        let value = parts[1].clone();
        match parts[0].to_lowercase().as_str() {
            "name" => metadata.name = value,
            "register no" | "register number" | "registerno" => metadata.register_no = value,
            "section" => metadata.section = value,
            "total semesters" => {
                metadata.total_semesters = value
                    .parse()
                    .map_err(|_| format!("Invalid Total Semesters: '{value}'"))?;
            }
            _ => {}
        }
    }

    // Validate required fields
    if metadata.name.is_empty() {
        return Err("Missing Name".into());
    }
    if metadata.register_no.is_empty() {
        return Err("Missing Register No".into());
    }
    if metadata.section.is_empty() {
        return Err("Missing Section".into());
    }
    if metadata.total_semesters == 0 {
        return Err("Missing Total Semesters".into());
    }

    Ok(metadata)
}

/// Parse a single grade row into its semester number and subject
fn parse_grade_line(line: &str, headers: &[String]) -> Result<(u8, Subject), Box<dyn Error>> {
    let fields = parse_csv_line(line);

    let semester_str = get_field(&fields, "Semester", headers).ok_or("Missing semester")?;
    let semester_no: u8 = semester_str
        .parse()
        .map_err(|_| format!("Invalid semester: '{semester_str}'"))?;

    let code = get_field(&fields, "Code", headers)
        .filter(|c| !c.is_empty())
        .ok_or("Missing subject code")?
        .to_uppercase();

    let grade: Grade = get_field(&fields, "Grade", headers)
        .ok_or("Missing grade")?
        .parse()?;

    let reference = curriculum::find_subject(&code).map(|(_, s)| s);

    let credits = match get_field(&fields, "Credits", headers).filter(|c| !c.is_empty()) {
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| format!("Invalid credits for {code}: '{raw}'"))?,
        None => reference
            .map(|s| s.credits)
            .ok_or_else(|| format!("Unknown subject {code}; add a Credits column"))?,
    };

    let name = get_field(&fields, "Name", headers)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .or_else(|| reference.map(|s| s.name.to_string()))
        .unwrap_or_else(|| code.clone());

    Ok((semester_no, Subject::new(code, name, credits, grade)))
}

/// Position of a header column, ignoring case
fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/// Get a field value by header name
fn get_field<'a>(fields: &'a [String], name: &str, headers: &[String]) -> Option<&'a str> {
    column_index(headers, name)
        .and_then(|idx| fields.get(idx))
        .map(|f| f.trim())
}

/// Parse a CSV line, handling quoted fields and escaped quotes
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_line_quotes() {
        let fields = parse_csv_line(r#"1,GE2C82,"Lab, ""Python""",A"#);
        assert_eq!(fields, vec!["1", "GE2C82", "Lab, \"Python\"", "A"]);
    }

    #[test]
    fn test_parse_sheet_with_curriculum_lookup() {
        let sheet = "\
Name,Priya
Register No,ec21a001
Section,B
Total Semesters,2

Grades
Semester,Code,Grade
1,MA2122,O
1,PH2123,B
2,HS2281,U
";
        let student = parse_grade_sheet_str(sheet).unwrap();
        assert_eq!(student.register_no, "EC21A001");
        assert_eq!(student.semesters.len(), 2);

        let sem1 = student.semester(1).unwrap();
        assert_eq!(sem1.subjects[0].name, "Calculus for Engineers");
        // (4*10 + 3*6) / 7
        assert!((sem1.sgpa - 8.29).abs() < f64::EPSILON);

        let sem2 = student.semester(2).unwrap();
        assert!((sem2.subjects[0].credits - 1.5).abs() < f64::EPSILON);
        assert!(sem2.sgpa.abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_columns_override_curriculum() {
        let sheet = "\
Name,Priya
Register No,EC21A001
Section,B
Total Semesters,1
Grades
Code,Semester,Credits,Grade,Name
ZZ1000,1,2,A+,Elective Seminar
";
        let student = parse_grade_sheet_str(sheet).unwrap();
        let subject = &student.semesters[0].subjects[0];
        assert_eq!(subject.name, "Elective Seminar");
        assert!((subject.credits - 2.0).abs() < f64::EPSILON);
        assert!((student.cgpa - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_code_without_credits_fails() {
        let sheet = "\
Name,Priya
Register No,EC21A001
Section,B
Total Semesters,1
Grades
Semester,Code,Grade
1,ZZ1000,A
";
        let err = parse_grade_sheet_str(sheet).unwrap_err().to_string();
        assert!(err.contains("Line 7"), "{err}");
        assert!(err.contains("ZZ1000"), "{err}");
    }

    #[test]
    fn test_semester_beyond_total_fails() {
        let sheet = "\
Name,Priya
Register No,EC21A001
Section,B
Total Semesters,1
Grades
Semester,Code,Grade
1,MA2122,A
5,EC2521,O
";
        let err = parse_grade_sheet_str(sheet).unwrap_err().to_string();
        assert_eq!(err, "Line 8: Semester 5 is outside Total Semesters 1");
    }

    #[test]
    fn test_missing_metadata() {
        let sheet = "Name,Priya\nGrades\nSemester,Code,Grade\n";
        let err = parse_grade_sheet_str(sheet).unwrap_err().to_string();
        assert_eq!(err, "Missing Register No");
    }

    #[test]
    fn test_missing_grades_section() {
        assert!(parse_grade_sheet_str("Name,Priya\n").is_err());
    }
}
