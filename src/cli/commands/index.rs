//! Index command handler

use gradeplan::index::compute_index;
use gradeplan::store::CourseStore;

/// Run the index command: print the weighted academic index.
///
/// # Arguments
/// * `store` - The course store to read
/// * `verbose` - Whether to break down which courses qualified
pub fn run(store: &CourseStore, verbose: bool) {
    let courses = store.list();
    let index = compute_index(courses);

    println!("Weighted academic index: {index:.2}");

    if verbose {
        let qualifying: Vec<_> = courses
            .iter()
            .filter(|c| c.counts_toward_index())
            .collect();
        let credits: u32 = qualifying.iter().map(|c| c.credit_hours).sum();

        println!(
            "Based on {} of {} courses ({credits} credit hours)",
            qualifying.len(),
            courses.len()
        );
        for course in qualifying {
            // counts_toward_index guarantees a grade is present
            if let Some(grade) = course.grade {
                println!("  {} ({} h): {grade:.1}", course.name, course.credit_hours);
            }
        }
    }
}
