//! HTML report generator
//!
//! Generates ledger summary reports as a self-contained HTML page with
//! embedded CSS, rendered through an askama template.

use crate::core::report::{format_grade, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// One table row in the rendered report
struct CourseRow {
    name: String,
    credits: u32,
    grade: String,
    term: String,
    status: String,
}

/// Askama template backing the HTML report
#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate {
    index: String,
    course_count: usize,
    total_credits: u32,
    completed_count: usize,
    in_progress_count: usize,
    planned_count: usize,
    rows: Vec<CourseRow>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_template(ctx: &ReportContext) -> ReportTemplate {
        let rows = ctx
            .courses
            .iter()
            .map(|course| CourseRow {
                name: course.name.clone(),
                credits: course.credit_hours,
                grade: format_grade(course.grade),
                term: course.term.clone(),
                status: course.status.to_string(),
            })
            .collect();

        ReportTemplate {
            index: ctx.formatted_index(),
            course_count: ctx.course_count(),
            total_credits: ctx.total_credits(),
            completed_count: ctx.completed_count(),
            in_progress_count: ctx.in_progress_count(),
            planned_count: ctx.planned_count(),
            rows,
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = Self::build_template(ctx);
        Ok(template.render()?)
    }
}
