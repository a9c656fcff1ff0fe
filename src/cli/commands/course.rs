//! Course ledger command handlers (add, update, remove, list)

use gradeplan::index::compute_index;
use gradeplan::store::{CourseDraft, CoursePatch, CourseStore};
use gradeplan::{error, info};
use uuid::Uuid;

/// Run the add command: validate and register a new course.
///
/// # Arguments
/// * `store` - The course store to mutate
/// * `draft` - The course fields collected from CLI flags
/// * `verbose` - Whether to print the recomputed index after the add
pub fn add(store: &mut CourseStore, draft: CourseDraft, verbose: bool) {
    let name = draft.name.clone();
    match store.add(draft) {
        Ok(id) => {
            println!("✓ Course '{name}' registered with id {id}");
            info!("Course {id} added to ledger");

            if verbose {
                println!(
                    "Weighted academic index is now {:.2}",
                    compute_index(store.list())
                );
            }
        }
        Err(e) => {
            error!("Add failed for '{name}': {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Run the update command: merge a patch into an existing course.
pub fn update(store: &mut CourseStore, id: Uuid, patch: &CoursePatch) {
    match store.update(id, patch) {
        Ok(()) => {
            println!("✓ Course {id} updated");
            info!("Course {id} updated");
        }
        Err(e) => {
            error!("Update failed for {id}: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Run the remove command: delete a course by id.
///
/// Removing an id that is not in the ledger is a no-op, not an error.
pub fn remove(store: &mut CourseStore, id: Uuid) {
    match store.remove(id) {
        Ok(true) => {
            println!("✓ Course {id} removed");
            info!("Course {id} removed from ledger");
        }
        Ok(false) => {
            println!("ℹ No course found with id {id}; nothing removed");
        }
        Err(e) => {
            error!("Remove failed for {id}: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Run the list command: print every course and the current index.
pub fn list(store: &CourseStore) {
    let courses = store.list();

    if courses.is_empty() {
        println!("No courses registered.");
        return;
    }

    println!(
        "{:<36}  {:<28}  {:>7}  {:>5}  {:<6}  STATUS",
        "ID", "COURSE", "CREDITS", "GRADE", "TERM"
    );

    for course in courses {
        let id = course.id.to_string();
        let grade = course
            .grade
            .map_or_else(|| "-".to_string(), |g| format!("{g:.1}"));
        println!(
            "{:<36}  {:<28}  {:>7}  {:>5}  {:<6}  {}",
            id, course.name, course.credit_hours, grade, course.term, course.status
        );
    }

    println!(
        "\nWeighted academic index: {:.2} ({} courses)",
        compute_index(courses),
        courses.len()
    );
}
