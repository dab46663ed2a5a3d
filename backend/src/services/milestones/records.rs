//! Record retrieval for the `GET /student_records` endpoint.
//!
//! `student_id` is mandatory; `course_id` narrows the result set when
//! present. The response is always `{"records": [...]}` — an empty array
//! when nothing matched, which is how the consumer distinguishes "no
//! records found" from a transport error. The serialized `timestamp` is
//! integer seconds; callers that want milliseconds multiply by 1000.

use actix_web::{web, HttpResponse};
use common::requests::RecordsQuery;
use log::info;
use serde_json::json;

use crate::error::EngineError;
use crate::store::RecordStore;

pub async fn process(
    query: web::Query<RecordsQuery>,
    store: web::Data<RecordStore>,
) -> Result<HttpResponse, EngineError> {
    let student_id = required_param(&query.student_id, "student_id")?;
    let course_id = optional_param(&query.course_id);

    let records = store.query_by_student(&student_id, course_id.as_deref())?;
    if records.is_empty() {
        info!("no records found for student {student_id}");
    }
    Ok(HttpResponse::Ok().json(json!({ "records": records })))
}

pub(super) fn required_param(value: &Option<String>, name: &str) -> Result<String, EngineError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(EngineError::Validation(format!(
            "Missing required parameter: {name}"
        ))),
    }
}

pub(super) fn optional_param(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
