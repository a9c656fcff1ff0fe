//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Completion status of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    /// Course has been finished and graded
    Completed,
    /// Course is currently being taken
    InProgress,
    /// Course is planned for a future term
    Planned,
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "completed" | "done" => Ok(Self::Completed),
            "in-progress" | "inprogress" | "current" => Ok(Self::InProgress),
            "planned" | "future" => Ok(Self::Planned),
            _ => Err(format!("Unknown course status: '{s}'")),
        }
    }
}

/// Represents one registered course in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier, assigned at creation and never reused
    pub id: Uuid,

    /// Course name (e.g., "Calculus I")
    pub name: String,

    /// Credit hours, the weighting factor for the academic index
    pub credit_hours: u32,

    /// Grade on a 0-10 scale; `None` means no grade has been recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f32>,

    /// Academic term in `YYYY.S` form, semester 1 or 2 (e.g., "2025.1")
    pub term: String,

    /// Completion status
    pub status: CourseStatus,
}

impl Course {
    /// Create a new course with a freshly assigned id
    ///
    /// # Arguments
    /// * `name` - Course name
    /// * `credit_hours` - Credit hours (academic weight)
    /// * `grade` - Recorded grade, if any
    /// * `term` - Term in `YYYY.S` form
    /// * `status` - Completion status
    #[must_use]
    pub fn new(
        name: String,
        credit_hours: u32,
        grade: Option<f32>,
        term: String,
        status: CourseStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            credit_hours,
            grade,
            term,
            status,
        }
    }

    /// Whether this course contributes to the weighted academic index
    ///
    /// A course counts when it is not merely planned and has a recorded grade.
    #[must_use]
    pub const fn counts_toward_index(&self) -> bool {
        !matches!(self.status, CourseStatus::Planned) && self.grade.is_some()
    }
}
