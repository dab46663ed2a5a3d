use actix_web::{web, HttpResponse};
use common::requests::CountQuery;
use serde_json::json;

use super::records::required_param;
use crate::error::EngineError;
use crate::store::RecordStore;

pub async fn process(
    query: web::Query<CountQuery>,
    store: web::Data<RecordStore>,
) -> Result<HttpResponse, EngineError> {
    let student_id = required_param(&query.student_id, "student_id")?;
    let record_count = store.count_by_student(&student_id)?;
    Ok(HttpResponse::Ok().json(json!({
        "student_id": student_id,
        "record_count": record_count,
    })))
}
