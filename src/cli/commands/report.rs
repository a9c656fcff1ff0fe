//! Report command handler
//!
//! Generates ledger summary reports in Markdown or HTML format.

use gradeplan::config::Config;
use gradeplan::index::compute_index;
use gradeplan::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gradeplan::store::CourseStore;
use gradeplan::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default file stem for generated reports
const DEFAULT_REPORT_STEM: &str = "academic_report";

/// Run the report command.
///
/// # Arguments
/// * `store` - The course store to report on
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing the default reports directory
pub fn run(store: &CourseStore, output_file: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(store, output_file, format_str, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn generate_report(
    store: &CourseStore,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    // Parse the format
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let courses = store.list();
    let ctx = ReportContext::new(courses, compute_index(courses));

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let output_filename = format!("{DEFAULT_REPORT_STEM}.{}", format.extension());
        reports_dir.join(output_filename)
    };

    // Write the report
    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(&ctx, &final_output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?,
        ReportFormat::Html => HtmlReporter::new()
            .generate(&ctx, &final_output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?,
    }

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());

    Ok(())
}
