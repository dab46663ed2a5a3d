use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// Liveness probe, `GET /health`.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
