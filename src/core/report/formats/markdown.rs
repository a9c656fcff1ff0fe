//! Markdown report generator
//!
//! Generates ledger summary reports in Markdown format. These reports
//! render well in GitHub, GitLab, and VS Code.

use crate::core::report::{format_grade, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

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

        output = output.replace("{{index}}", &ctx.formatted_index());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{total_credits}}", &ctx.total_credits().to_string());
        output = output.replace("{{completed_count}}", &ctx.completed_count().to_string());
        output = output.replace(
            "{{in_progress_count}}",
            &ctx.in_progress_count().to_string(),
        );
        output = output.replace("{{planned_count}}", &ctx.planned_count().to_string());

        let course_table = Self::generate_course_table(ctx);
        output = output.replace("{{course_table}}", &course_table);

        output
    }

    /// Generate the course table, one row per registered course
    fn generate_course_table(ctx: &ReportContext) -> String {
        if ctx.courses.is_empty() {
            return "_No courses registered._".to_string();
        }

        let mut table = String::new();
        let _ = writeln!(table, "| Course | Credits | Grade | Term | Status |");
        table.push_str("|---|---|---|---|---|\n");

        for course in ctx.courses {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} |",
                course.name,
                course.credit_hours,
                format_grade(course.grade),
                course.term,
                course.status
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
