//! Course store: the owned, persisted collection of course records
//!
//! The store holds the ordered course list (most-recently-added first) and
//! applies validated mutations. Every successful mutation rewrites the whole
//! collection to a single TOML snapshot file; a failed write surfaces as
//! [`StoreError::Persistence`] while the in-memory state stays applied and
//! remains the source of truth for the rest of the session.

use crate::core::models::{Course, CourseStatus};
use crate::core::validate::{validate_course, ValidationError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// File name of the course snapshot inside the data directory
pub const SNAPSHOT_FILE_NAME: &str = "courses.toml";

/// Failure modes of a store mutation
#[derive(Debug, Error)]
pub enum StoreError {
    /// The mutation violated a validation rule; the collection is unchanged
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// An update targeted an id that is not in the collection
    #[error("No course found with id {0}")]
    NotFound(Uuid),
    /// The snapshot write failed; the mutation is still applied in memory
    #[error("Failed to save course data: {0}")]
    Persistence(String),
}

/// Input for [`CourseStore::add`]: a course without an id
#[derive(Debug, Clone)]
pub struct CourseDraft {
    /// Course name
    pub name: String,
    /// Credit hours
    pub credit_hours: u32,
    /// Recorded grade, if any
    pub grade: Option<f32>,
    /// Term in `YYYY.S` form
    pub term: String,
    /// Completion status
    pub status: CourseStatus,
}

/// Partial update for [`CourseStore::update`]
///
/// `None` fields keep the existing value. The grade field is doubly
/// optional: `Some(None)` clears a recorded grade, `Some(Some(g))` replaces
/// it, `None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    /// New name, if changing
    pub name: Option<String>,
    /// New credit hours, if changing
    pub credit_hours: Option<u32>,
    /// New grade; `Some(None)` clears it
    pub grade: Option<Option<f32>>,
    /// New term, if changing
    pub term: Option<String>,
    /// New status, if changing
    pub status: Option<CourseStatus>,
}

/// On-disk layout of the snapshot file
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    courses: Vec<Course>,
}

/// The ordered, persisted collection of course records
#[derive(Debug)]
pub struct CourseStore {
    courses: Vec<Course>,
    snapshot_path: PathBuf,
}

impl CourseStore {
    /// Open the store backed by the snapshot file at `path`.
    ///
    /// A missing file yields the fixed seed collection; a file that cannot
    /// be parsed is logged and also falls back to the seed collection.
    #[must_use]
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        let snapshot_path = path.into();
        let courses = load_snapshot(&snapshot_path).unwrap_or_else(seed_courses);

        Self {
            courses,
            snapshot_path,
        }
    }

    /// Current ordered course list, most-recently-added first
    #[must_use]
    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Validate a draft, assign it a fresh id, and prepend it to the
    /// collection.
    ///
    /// # Errors
    /// - [`StoreError::Validation`] when the draft breaks a rule; the
    ///   collection is left unchanged.
    /// - [`StoreError::Persistence`] when the snapshot write fails; the new
    ///   record is still present in memory.
    pub fn add(&mut self, draft: CourseDraft) -> Result<Uuid, StoreError> {
        let course = Course::new(
            draft.name,
            draft.credit_hours,
            draft.grade,
            draft.term,
            draft.status,
        );
        validate_course(&course)?;

        let id = course.id;
        self.courses.insert(0, course);
        crate::debug!("Course {id} added, {} total", self.courses.len());

        self.persist()?;
        Ok(id)
    }

    /// Merge a patch into the course with the given id, revalidating the
    /// merged record before committing. Position in the ordering is
    /// preserved.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] when no course has that id.
    /// - [`StoreError::Validation`] when the merged record breaks a rule;
    ///   the stored record is left unchanged.
    /// - [`StoreError::Persistence`] when the snapshot write fails; the
    ///   updated record is still present in memory.
    pub fn update(&mut self, id: Uuid, patch: &CoursePatch) -> Result<(), StoreError> {
        let position = self
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut merged = self.courses[position].clone();
        if let Some(name) = &patch.name {
            merged.name.clone_from(name);
        }
        if let Some(credit_hours) = patch.credit_hours {
            merged.credit_hours = credit_hours;
        }
        if let Some(grade) = patch.grade {
            merged.grade = grade;
        }
        if let Some(term) = &patch.term {
            merged.term.clone_from(term);
        }
        if let Some(status) = patch.status {
            merged.status = status;
        }

        validate_course(&merged)?;

        self.courses[position] = merged;
        crate::debug!("Course {id} updated");

        self.persist()
    }

    /// Remove the course with the given id.
    ///
    /// Returns `Ok(false)` when no such course exists; that is a no-op, not
    /// an error, and nothing is written.
    ///
    /// # Errors
    /// [`StoreError::Persistence`] when a record was removed but the
    /// snapshot write fails.
    pub fn remove(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);

        if self.courses.len() == before {
            return Ok(false);
        }

        crate::debug!("Course {id} removed, {} remaining", self.courses.len());
        self.persist()?;
        Ok(true)
    }

    /// Write the whole collection to the snapshot file
    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.snapshot_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Persistence(e.to_string()))?;
        }

        let snapshot = Snapshot {
            courses: self.courses.clone(),
        };
        let toml_str =
            toml::to_string_pretty(&snapshot).map_err(|e| StoreError::Persistence(e.to_string()))?;

        fs::write(&self.snapshot_path, toml_str)
            .map_err(|e| StoreError::Persistence(e.to_string()))
    }
}

/// Read and parse the snapshot file; `None` means "fall back to the seed"
fn load_snapshot(path: &Path) -> Option<Vec<Course>> {
    if !path.exists() {
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            crate::warn!("Could not read course snapshot {}: {e}", path.display());
            return None;
        }
    };

    match toml::from_str::<Snapshot>(&content) {
        Ok(snapshot) => Some(snapshot.courses),
        Err(e) => {
            crate::warn!(
                "Course snapshot {} is malformed, starting from the seed collection: {e}",
                path.display()
            );
            None
        }
    }
}

/// The fixed example collection used when no usable snapshot exists
#[must_use]
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course::new(
            "Linear Algebra".to_string(),
            48,
            None,
            "2024.2".to_string(),
            CourseStatus::InProgress,
        ),
        Course::new(
            "Intro to Programming".to_string(),
            64,
            Some(9.0),
            "2024.1".to_string(),
            CourseStatus::Completed,
        ),
        Course::new(
            "Calculus I".to_string(),
            64,
            Some(7.5),
            "2024.1".to_string(),
            CourseStatus::Completed,
        ),
    ]
}
