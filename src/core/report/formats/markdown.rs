//! Markdown report generator
//!
//! Generates the admin report as Markdown tables, which render well in GitHub,
//! GitLab and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", &ctx.title);
        output = output.replace(
            "{{total_students}}",
            &ctx.stats.total_students.to_string(),
        );
        output = output.replace(
            "{{arrear_having_students}}",
            &ctx.stats.arrear_having_students.to_string(),
        );
        output = output.replace(
            "{{highest_cgpa}}",
            &format!("{:.2}", ctx.stats.highest_cgpa),
        );
        output = output.replace("{{student_table}}", &Self::generate_student_table(ctx));

        output
    }

    /// Generate the per-student table
    fn generate_student_table(ctx: &ReportContext) -> String {
        if ctx.rows.is_empty() {
            return "_No student records._\n".to_string();
        }

        let mut table = String::from("| Name | Section | Reg No |");
        for no in 1..=ctx.semester_columns {
            let _ = write!(table, " S{no} Arrears | S{no} Total | S{no} SGPA |");
        }
        table.push_str(" CGPA | Total Arrears |\n");

        let columns = 5 + 3 * usize::from(ctx.semester_columns);
        table.push('|');
        table.push_str(&"---|".repeat(columns));
        table.push('\n');

        for row in &ctx.rows {
            let _ = write!(
                table,
                "| {} | {} | {} |",
                escape_cell(&row.name),
                escape_cell(&row.section),
                escape_cell(&row.register_no)
            );
            for cell in &row.semesters {
                let _ = write!(
                    table,
                    " {} | {:.1} | {:.2} |",
                    cell.arrears, cell.weighted_points, cell.sgpa
                );
            }
            let _ = writeln!(table, " {:.2} | {} |", row.cgpa, row.total_arrears);
        }

        table
    }
}

/// Keep user-entered text from breaking the table layout
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::demo_student;

    #[test]
    fn test_render_contains_rows_and_stats() {
        let ctx = ReportContext::from_students(&[demo_student()]);
        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.starts_with("# CGPA Student Records"));
        assert!(md.contains("| 1 | 0 | 7.88 |"), "{md}");
        assert!(md.contains("| John Doe | A | REG2024001 |"));
        assert!(md.contains("S2 SGPA"));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn test_render_empty_cohort() {
        let ctx = ReportContext::from_students(&[]);
        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("_No student records._"));
        assert!(md.contains("| 0 | 0 | 0.00 |"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("A|B"), "A\\|B");
    }
}
