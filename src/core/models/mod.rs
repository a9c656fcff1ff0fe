//! Data models for the course ledger

pub mod course;

pub use course::{Course, CourseStatus};
