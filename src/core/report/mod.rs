//! Report generation module for the course ledger
//!
//! This module provides functionality to generate ledger summary reports in
//! various formats (Markdown, HTML) showing the registered courses and the
//! weighted academic index.

pub mod formats;

use crate::core::models::{Course, CourseStatus};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything needed to render a ledger report: the course slice
/// and its precomputed weighted index. The index is passed in explicitly so
/// the calculator stays a pure function of the collection.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Courses in ledger order, most-recently-added first
    pub courses: &'a [Course],
    /// Weighted academic index computed over `courses`
    pub index: f32,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(courses: &'a [Course], index: f32) -> Self {
        Self { courses, index }
    }

    /// Get course count
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Calculate total credit hours across all courses
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credit_hours).sum()
    }

    /// Number of completed courses
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.count_with_status(CourseStatus::Completed)
    }

    /// Number of in-progress courses
    #[must_use]
    pub fn in_progress_count(&self) -> usize {
        self.count_with_status(CourseStatus::InProgress)
    }

    /// Number of planned courses
    #[must_use]
    pub fn planned_count(&self) -> usize {
        self.count_with_status(CourseStatus::Planned)
    }

    /// The index formatted for display (two decimal places)
    #[must_use]
    pub fn formatted_index(&self) -> String {
        format!("{:.2}", self.index)
    }

    fn count_with_status(&self, status: CourseStatus) -> usize {
        self.courses.iter().filter(|c| c.status == status).count()
    }
}

/// Format a grade for display; unset grades render as a dash
#[must_use]
pub fn format_grade(grade: Option<f32>) -> String {
    grade.map_or_else(|| "-".to_string(), |g| format!("{g:.1}"))
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index::compute_index;

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new(
                "Physics I".to_string(),
                64,
                Some(8.0),
                "2025.1".to_string(),
                CourseStatus::Completed,
            ),
            Course::new(
                "Calc II".to_string(),
                64,
                Some(6.0),
                "2025.1".to_string(),
                CourseStatus::InProgress,
            ),
            Course::new(
                "Future Course".to_string(),
                32,
                None,
                "2026.1".to_string(),
                CourseStatus::Planned,
            ),
        ]
    }

    #[test]
    fn context_aggregates_counts_and_credits() {
        let courses = sample_courses();
        let ctx = ReportContext::new(&courses, compute_index(&courses));

        assert_eq!(ctx.course_count(), 3);
        assert_eq!(ctx.total_credits(), 160);
        assert_eq!(ctx.completed_count(), 1);
        assert_eq!(ctx.in_progress_count(), 1);
        assert_eq!(ctx.planned_count(), 1);
        assert_eq!(ctx.formatted_index(), "7.00");
    }

    #[test]
    fn grades_format_with_dash_for_unset() {
        assert_eq!(format_grade(Some(8.0)), "8.0");
        assert_eq!(format_grade(Some(6.75)), "6.8");
        assert_eq!(format_grade(None), "-");
    }
}
