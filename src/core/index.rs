//! Weighted academic index computation
//!
//! The index is the credit-hour-weighted average grade over every course
//! that is past the planning stage and has a recorded grade. It is a pure
//! reduction over the collection: same contents, same result, regardless of
//! record order.

use crate::core::models::Course;

/// Compute the weighted academic index for a collection of courses.
///
/// Filters to courses where `status != Planned` and a grade is recorded,
/// then returns `sum(grade * credit_hours) / sum(credit_hours)` over that
/// subset. Returns `0.0` when no course qualifies, rather than dividing by
/// zero.
#[must_use]
pub fn compute_index(courses: &[Course]) -> f32 {
    let mut weighted_sum = 0.0f32;
    let mut total_credits = 0u32;

    for course in courses.iter().filter(|c| c.counts_toward_index()) {
        if let Some(grade) = course.grade {
            weighted_sum += grade * course.credit_hours as f32;
            total_credits += course.credit_hours;
        }
    }

    if total_credits == 0 {
        return 0.0;
    }

    weighted_sum / total_credits as f32
}
