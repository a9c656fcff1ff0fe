//! Validation rules gating every course mutation
//!
//! Rules are applied in a fixed order and the first violation wins; later
//! rules are not checked once one fails.

use crate::core::models::{Course, CourseStatus};
use thiserror::Error;

/// Lowest accepted grade
pub const GRADE_MIN: f32 = 0.0;
/// Highest accepted grade
pub const GRADE_MAX: f32 = 10.0;

/// A violation of one of the course validation rules
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Rule 1: name is empty after trimming
    #[error("Course name must not be empty")]
    EmptyName,
    /// Rule 2: credit hours are not positive
    #[error("Credit hours must be greater than zero")]
    InvalidCreditHours,
    /// Rule 3: completed course has no grade
    #[error("A completed course requires a grade")]
    CompletedWithoutGrade,
    /// Rule 3: grade falls outside the accepted scale
    #[error("Grade must be between 0 and 10, got {0}")]
    GradeOutOfRange(f32),
    /// Rule 4: term does not match the year-dot-semester pattern
    #[error("Term must use the YYYY.S format with semester 1 or 2, got '{0}'")]
    InvalidTerm(String),
}

/// Check a course against the full rule list
///
/// # Errors
/// Returns the first rule violation found, in rule order: name, credit
/// hours, grade (completed courses only), term.
pub fn validate_course(course: &Course) -> Result<(), ValidationError> {
    if course.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if course.credit_hours == 0 {
        return Err(ValidationError::InvalidCreditHours);
    }

    if course.status == CourseStatus::Completed {
        match course.grade {
            None => return Err(ValidationError::CompletedWithoutGrade),
            Some(grade) if !(GRADE_MIN..=GRADE_MAX).contains(&grade) => {
                return Err(ValidationError::GradeOutOfRange(grade));
            }
            Some(_) => {}
        }
    }

    if !is_valid_term(&course.term) {
        return Err(ValidationError::InvalidTerm(course.term.clone()));
    }

    Ok(())
}

/// Whether a term string matches `YYYY.S` with S in {1, 2}
#[must_use]
pub fn is_valid_term(term: &str) -> bool {
    let bytes = term.as_bytes();
    bytes.len() == 6
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'.'
        && (bytes[5] == b'1' || bytes[5] == b'2')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        Course::new(
            "Physics I".to_string(),
            64,
            Some(8.0),
            "2025.1".to_string(),
            CourseStatus::Completed,
        )
    }

    #[test]
    fn accepts_a_well_formed_course() {
        assert_eq!(validate_course(&sample_course()), Ok(()));
    }

    #[test]
    fn rejects_empty_name() {
        let mut course = sample_course();
        course.name = "   ".to_string();

        assert_eq!(validate_course(&course), Err(ValidationError::EmptyName));
    }

    #[test]
    fn rejects_zero_credit_hours() {
        let mut course = sample_course();
        course.credit_hours = 0;

        assert_eq!(
            validate_course(&course),
            Err(ValidationError::InvalidCreditHours)
        );
    }

    #[test]
    fn rejects_completed_course_without_grade() {
        let mut course = sample_course();
        course.grade = None;

        assert_eq!(
            validate_course(&course),
            Err(ValidationError::CompletedWithoutGrade)
        );
    }

    #[test]
    fn rejects_out_of_range_grade_on_completed_course() {
        let mut course = sample_course();
        course.grade = Some(11.0);
        assert_eq!(
            validate_course(&course),
            Err(ValidationError::GradeOutOfRange(11.0))
        );

        course.grade = Some(-0.5);
        assert_eq!(
            validate_course(&course),
            Err(ValidationError::GradeOutOfRange(-0.5))
        );
    }

    #[test]
    fn accepts_boundary_grades() {
        let mut course = sample_course();
        course.grade = Some(0.0);
        assert_eq!(validate_course(&course), Ok(()));

        course.grade = Some(10.0);
        assert_eq!(validate_course(&course), Ok(()));
    }

    #[test]
    fn grade_rule_only_applies_to_completed_courses() {
        let mut course = sample_course();
        course.status = CourseStatus::Planned;
        course.grade = None;
        assert_eq!(validate_course(&course), Ok(()));

        course.status = CourseStatus::InProgress;
        assert_eq!(validate_course(&course), Ok(()));
    }

    #[test]
    fn rejects_malformed_terms() {
        for bad in ["2025", "2025.3", "2025-1", "25.1", "2025.12", "abcd.1", ""] {
            let mut course = sample_course();
            course.term = bad.to_string();

            assert_eq!(
                validate_course(&course),
                Err(ValidationError::InvalidTerm(bad.to_string())),
                "term '{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn accepts_both_semesters() {
        for good in ["2025.1", "2025.2", "1999.1"] {
            assert!(is_valid_term(good), "term '{good}' should be accepted");
        }
    }

    #[test]
    fn first_violation_wins() {
        // Violates every rule at once; name must be reported first
        let mut course = sample_course();
        course.name = String::new();
        course.credit_hours = 0;
        course.grade = None;
        course.term = "bad".to_string();

        assert_eq!(validate_course(&course), Err(ValidationError::EmptyName));

        // Fix the name and the credit-hours rule surfaces next
        course.name = "Physics I".to_string();
        assert_eq!(
            validate_course(&course),
            Err(ValidationError::InvalidCreditHours)
        );

        // Fix the credits and the grade rule surfaces next
        course.credit_hours = 64;
        assert_eq!(
            validate_course(&course),
            Err(ValidationError::CompletedWithoutGrade)
        );

        // Fix the grade and the term rule surfaces last
        course.grade = Some(7.0);
        assert_eq!(
            validate_course(&course),
            Err(ValidationError::InvalidTerm("bad".to_string()))
        );
    }
}
