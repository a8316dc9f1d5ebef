//! Extractor and fallback error handling.
//!
//! actix's default extractor errors are plain text; these hooks route them
//! through `AppError` so every failure has the `{"error": ...}` shape.

use actix_web::{
    error::{JsonPayloadError, PathError},
    web, Error, HttpRequest,
};

use crate::core::AppError;

/// Rejected JSON bodies become 400 validation errors
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Non-numeric ids and similar become 400 validation errors
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid path parameter: {}", err)).into()
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<web::Json<()>, AppError> {
    Err(AppError::not_found(format!("No route for {} {}", req.method(), req.path())))
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

pub fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected request"
    );
}
