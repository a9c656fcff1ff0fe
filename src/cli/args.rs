//! CLI argument definitions for `Gradeplan`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

use gradeplan::config::ConfigOverrides;
use gradeplan::logger::Level;
use gradeplan::models::CourseStatus;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI course status argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StatusArg {
    /// Course has been finished and graded
    Completed,
    /// Course is currently being taken
    InProgress,
    /// Course is planned for a future term
    Planned,
}

impl From<StatusArg> for CourseStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Completed => Self::Completed,
            StatusArg::InProgress => Self::InProgress,
            StatusArg::Planned => Self::Planned,
        }
    }
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Register a new course in the ledger.
    Add {
        /// Course name
        #[arg(value_name = "NAME")]
        name: String,

        /// Credit hours (academic weight, must be positive)
        #[arg(short, long, value_name = "HOURS")]
        credits: u32,

        /// Grade on the 0-10 scale (omit when not yet graded)
        #[arg(short, long, value_name = "GRADE")]
        grade: Option<f32>,

        /// Academic term in YYYY.S form, semester 1 or 2 (e.g. 2025.1)
        #[arg(short, long, value_name = "TERM")]
        term: String,

        /// Completion status
        #[arg(short, long, value_enum, default_value_t = StatusArg::Planned)]
        status: StatusArg,
    },
    /// Update fields of an existing course.
    ///
    /// Only the provided flags change; everything else is kept. The merged
    /// record is fully revalidated before committing.
    Update {
        /// Id of the course to update
        #[arg(value_name = "ID")]
        id: Uuid,

        /// New course name
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// New credit hours
        #[arg(long, value_name = "HOURS")]
        credits: Option<u32>,

        /// New grade on the 0-10 scale
        #[arg(long, value_name = "GRADE", conflicts_with = "clear_grade")]
        grade: Option<f32>,

        /// Clear the recorded grade
        #[arg(long)]
        clear_grade: bool,

        /// New academic term in YYYY.S form
        #[arg(long, value_name = "TERM")]
        term: Option<String>,

        /// New completion status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    /// Remove a course from the ledger.
    Remove {
        /// Id of the course to remove
        #[arg(value_name = "ID")]
        id: Uuid,
    },
    /// List all registered courses and the current index.
    List,
    /// Print the weighted academic index.
    Index,
    /// Generate a ledger summary report.
    Report {
        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradeplan",
    about = "Gradeplan command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config course data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config course data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config reports output directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports output directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--data-dir`) take precedence over long-form flags (e.g.,
    /// `--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
