//! # Milestone Ingestion Service
//!
//! Backend logic for the `POST /add_milestone` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives a JSON `MilestoneSubmission`.
//! 2.  **Validation**: required fields are checked first, then the numeric
//!     constraints (`score` finite and non-negative, `max_score` strictly
//!     positive). All validation happens before the store is touched, so a
//!     rejected submission never leaves a partial write.
//! 3.  **Grading**: the percentage and letter grade are derived through the
//!     injected `GradeScale` and stored alongside the raw score, never
//!     recomputed later.
//! 4.  **Persistence**: exactly one record is appended, stamped with the
//!     server clock in whole seconds.
//! 5.  **HTTP Response**: `{message, percentage, grade}` with the percentage
//!     rounded to two decimals for display.

use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::{web, HttpResponse};
use common::model::record::{round2, MilestoneRecord};
use common::requests::MilestoneSubmission;
use log::info;
use serde_json::json;

use crate::error::EngineError;
use crate::grading::{self, GradeScale};
use crate::store::{NewRecord, RecordStore};

pub async fn process(
    payload: web::Json<MilestoneSubmission>,
    store: web::Data<RecordStore>,
    scale: web::Data<GradeScale>,
) -> Result<HttpResponse, EngineError> {
    let record = ingest(&payload, &scale, &store)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": format!(
            "Milestone recorded for student {} in course {}",
            record.student_id, record.course_id
        ),
        "percentage": round2(record.percentage),
        "grade": record.grade,
    })))
}

/// Validates a submission, grades it, and appends exactly one record.
pub fn ingest(
    submission: &MilestoneSubmission,
    scale: &GradeScale,
    store: &RecordStore,
) -> Result<MilestoneRecord, EngineError> {
    let student_id = required(&submission.student_id, "student_id")?;
    let course_id = required(&submission.course_id, "course_id")?;
    let score = submission
        .score
        .ok_or_else(|| missing_field("score"))?;
    let max_score = submission
        .max_score
        .ok_or_else(|| missing_field("max_score"))?;

    if !score.is_finite() {
        return Err(EngineError::Validation(
            "score must be a finite number".to_string(),
        ));
    }
    if score < 0.0 {
        return Err(EngineError::Validation(
            "score must not be negative".to_string(),
        ));
    }
    if !max_score.is_finite() || max_score <= 0.0 {
        return Err(EngineError::Validation(
            "max_score must be greater than zero".to_string(),
        ));
    }

    let (percentage, grade) = grading::grade(score, max_score, scale)?;
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;

    let new_record = NewRecord {
        student_id,
        student_name: submission.student_name.trim().to_string(),
        course_id,
        instructor_name: submission.instructor_name.trim().to_string(),
        activity_type: submission.activity_type.trim().to_string(),
        score,
        max_score,
        percentage,
        grade,
        record_type: submission.record_type.trim().to_string(),
        comments: submission.comments.trim().to_string(),
        timestamp,
    };
    let id = store.append(&new_record)?;
    info!(
        "stored milestone {} for student {} in course {} ({}%)",
        id,
        new_record.student_id,
        new_record.course_id,
        round2(percentage)
    );
    Ok(new_record.into_record(id))
}

fn required(value: &Option<String>, name: &str) -> Result<String, EngineError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        Some(_) => Err(EngineError::Validation(format!("{name} must not be empty"))),
        None => Err(missing_field(name)),
    }
}

fn missing_field(name: &str) -> EngineError {
    EngineError::Validation(format!("Missing required field: {name}"))
}
