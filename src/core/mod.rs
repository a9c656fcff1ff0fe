//! Core module for the course ledger and its surrounding functionality

pub mod config;
pub mod index;
pub mod models;
pub mod report;
pub mod store;
pub mod validate;

/// Returns the current version of the `Gradeplan` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
