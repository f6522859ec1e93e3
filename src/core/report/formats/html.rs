//! HTML report generator
//!
//! Renders the admin report as a self-contained HTML page through an askama
//! template. Numbers are formatted here so the template only lays them out.

use crate::core::report::{ReportContext, ReportGenerator, StudentRow};
use askama::Template;
use std::error::Error;

struct CellView {
    arrears: usize,
    total: String,
    sgpa: String,
}

struct RowView {
    name: String,
    section: String,
    register_no: String,
    cells: Vec<CellView>,
    cgpa: String,
    total_arrears: usize,
}

impl From<&StudentRow> for RowView {
    fn from(row: &StudentRow) -> Self {
        Self {
            name: row.name.clone(),
            section: row.section.clone(),
            register_no: row.register_no.clone(),
            cells: row
                .semesters
                .iter()
                .map(|cell| CellView {
                    arrears: cell.arrears,
                    total: format!("{:.1}", cell.weighted_points),
                    sgpa: format!("{:.2}", cell.sgpa),
                })
                .collect(),
            cgpa: format!("{:.2}", row.cgpa),
            total_arrears: row.total_arrears,
        }
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportPage {
    title: String,
    total_students: usize,
    arrear_having_students: usize,
    highest_cgpa: String,
    semester_numbers: Vec<u8>,
    rows: Vec<RowView>,
}

impl ReportPage {
    fn from_context(ctx: &ReportContext) -> Self {
        Self {
            title: ctx.title.clone(),
            total_students: ctx.stats.total_students,
            arrear_having_students: ctx.stats.arrear_having_students,
            highest_cgpa: format!("{:.2}", ctx.stats.highest_cgpa),
            semester_numbers: (1..=ctx.semester_columns).collect(),
            rows: ctx.rows.iter().map(RowView::from).collect(),
        }
    }
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(ReportPage::from_context(ctx).render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::demo_student;

    #[test]
    fn test_render_table() {
        let ctx = ReportContext::from_students(&[demo_student()]);
        let html = HtmlReporter::new().render(&ctx).unwrap();

        assert!(html.contains("<title>CGPA Student Records</title>"));
        assert!(html.contains("SEM 2"));
        assert!(html.contains("<td>REG2024001</td>"));
        assert!(html.contains("<td>7.53</td>"));
        assert!(html.contains("<td>7.88</td>"));
        assert!(!html.contains("No student records."));
    }

    #[test]
    fn test_render_escapes_names() {
        let mut student = demo_student();
        student.name = "<b>Doe</b>".to_string();
        let ctx = ReportContext::from_students(&[student]);
        let html = HtmlReporter::new().render(&ctx).unwrap();

        assert!(!html.contains("<b>Doe</b>"));
        assert!(html.contains("&lt;b&gt;Doe"));
    }

    #[test]
    fn test_render_empty_cohort() {
        let ctx = ReportContext::from_students(&[]);
        let html = HtmlReporter::new().render(&ctx).unwrap();
        assert!(html.contains("No student records."));
        assert!(!html.contains("<table>"));
    }
}
