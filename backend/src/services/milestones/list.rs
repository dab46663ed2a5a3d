//! Full listing for the `GET /all_milestones` endpoint.
//!
//! Returns every stored record across all students and courses as
//! `{"milestones": [...]}`, timestamp ascending. An administrative
//! overview; there is no pagination.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::EngineError;
use crate::store::RecordStore;

pub async fn process(store: web::Data<RecordStore>) -> Result<HttpResponse, EngineError> {
    let milestones = store.all_records()?;
    Ok(HttpResponse::Ok().json(json!({ "milestones": milestones })))
}
