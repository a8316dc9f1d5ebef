//! CORS policy.
//!
//! With no configured origins every origin is accepted, which is what the
//! existing web frontends rely on. Listing origins switches to an allow-list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config::HttpConfig;

const MAX_AGE_SECS: usize = 3600;

pub fn create_cors(config: &HttpConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(MAX_AGE_SECS);

    if config.cors_allowed_origins.is_empty() {
        return cors.allow_any_origin();
    }

    tracing::info!(origins = ?config.cors_allowed_origins, "Restricting CORS origins");
    config
        .cors_allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
