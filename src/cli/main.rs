//! Command-line interface entry point for `Gradeplan`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gradeplan::config::Config;
use gradeplan::info;
use gradeplan::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use gradeplan::store::{CourseDraft, CoursePatch, CourseStore};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Add {
            name,
            credits,
            grade,
            term,
            status,
        } => {
            let draft = CourseDraft {
                name,
                credit_hours: credits,
                grade,
                term,
                status: status.into(),
            };
            let mut store = open_store(&config);
            commands::course::add(&mut store, draft, verbose);
        }
        Command::Update {
            id,
            name,
            credits,
            grade,
            clear_grade,
            term,
            status,
        } => {
            let patch = CoursePatch {
                name,
                credit_hours: credits,
                grade: if clear_grade {
                    Some(None)
                } else {
                    grade.map(Some)
                },
                term,
                status: status.map(std::convert::Into::into),
            };
            let mut store = open_store(&config);
            commands::course::update(&mut store, id, &patch);
        }
        Command::Remove { id } => {
            let mut store = open_store(&config);
            commands::course::remove(&mut store, id);
        }
        Command::List => {
            commands::course::list(&open_store(&config));
        }
        Command::Index => {
            commands::index::run(&open_store(&config), verbose);
        }
        Command::Report { output, format } => {
            commands::report::run(&open_store(&config), output.as_deref(), &format, &config);
        }
    }
}

/// Open the course store at the configured snapshot path
fn open_store(config: &Config) -> CourseStore {
    CourseStore::open(config.course_snapshot_path())
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
