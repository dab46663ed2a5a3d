//! Environment-driven runtime configuration.

use std::env;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

impl Config {
    /// Reads `HOST`, `PORT` and `MILESTONE_DB` from the environment,
    /// falling back to local defaults.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let db_path = env::var("MILESTONE_DB").unwrap_or_else(|_| "milestones.sqlite".to_string());
        Config {
            host,
            port,
            db_path,
        }
    }
}

/// JSON extractor configuration shared by the server and the test suite.
///
/// Malformed bodies must come back as `{"error": ...}` like every other
/// failure, so the default plain-text rejection is replaced here.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1024 * 1024) // 1 MB
        .error_handler(|err, _req| {
            let body = json!({ "error": err.to_string() });
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}
