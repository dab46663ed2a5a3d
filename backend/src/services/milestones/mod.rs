//! # Milestone Service Module
//!
//! This module aggregates all API endpoints of the milestone record engine.
//! It acts as a router, directing incoming HTTP requests to the appropriate
//! handler logic defined in its sub-modules.
//!
//! ## Sub-modules:
//! - `add`: Validates a milestone submission, grades it, and appends it to the store.
//! - `records`: Retrieves a student's records, optionally narrowed to one course.
//! - `average`: Computes the course-level average percentage and its letter grade.
//! - `count`: Reports how many records a student has.
//! - `list`: Lists every stored milestone across all students and courses.
//!
//! ## Registered Routes:
//!
//! *   **`POST /add_milestone`**:
//!     - **Handler**: `add::process`
//!     - **Description**: Expects a JSON `MilestoneSubmission`. On success the
//!       record is stored and the response carries `{message, percentage, grade}`;
//!       validation failures come back as `{"error": ...}` with nothing stored.
//!
//! *   **`GET /student_records?student_id=...&course_id=...`**:
//!     - **Handler**: `records::process`
//!     - **Description**: Returns `{"records": [...]}` ordered by timestamp.
//!       `course_id` is optional; an empty array means no records matched.
//!
//! *   **`GET /course_average?student_id=...&course_id=...`**:
//!     - **Handler**: `average::process`
//!     - **Description**: Returns `{"average", "letter_grade"}` over the
//!       student's records in the course, or `{"error": ...}` when there are none.
//!
//! *   **`GET /record_count?student_id=...`**:
//!     - **Handler**: `count::process`
//!     - **Description**: Returns `{"student_id", "record_count"}`.
//!
//! *   **`GET /all_milestones`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Returns `{"milestones": [...]}` with every stored
//!       record, timestamp ascending.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod add;
mod average;
mod count;
mod list;
mod records;

pub use add::ingest;

// The paths are a published contract consumed by existing clients, so the
// scope stays at the root with no API prefix.
const API_PATH: &str = "";

/// Configures and returns the Actix scope for the milestone routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/add_milestone", post().to(add::process))
        .route("/student_records", get().to(records::process))
        .route("/course_average", get().to(average::process))
        .route("/record_count", get().to(count::process))
        .route("/all_milestones", get().to(list::process))
}
