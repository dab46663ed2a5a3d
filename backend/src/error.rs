//! Request-local error taxonomy for the milestone engine.
//!
//! Three kinds of failure leave the engine, and each maps to one HTTP
//! status and a `{"error": ...}` JSON body:
//! - `Validation` — bad or missing input, `400`. Raised strictly before
//!   any store mutation, so it never leaves a partial write behind.
//! - `NotFound` — a well-formed query that matched no data, `404`. This
//!   is informational, not a server fault.
//! - `Storage` — the backing store failed or timed out, `503`. Fatal for
//!   the request, never for the process; the next request gets a fresh
//!   attempt.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl ResponseError for EngineError {
    fn status_code(&self) -> StatusCode {
        match self {
            EngineError::Validation(_) => StatusCode::BAD_REQUEST,
            EngineError::NotFound(_) => StatusCode::NOT_FOUND,
            EngineError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Storage detail goes to the log, not to the caller.
            EngineError::Storage(e) => {
                error!("storage failure: {e}");
                "The record store is currently unavailable".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
