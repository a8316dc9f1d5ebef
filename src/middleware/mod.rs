pub mod cors;
pub mod error_handler;
pub mod rate_limit;
pub mod request_id;

pub use cors::create_cors;
pub use error_handler::{json_config, json_error_handler, log_error, not_found, path_config};
pub use rate_limit::RateLimiter;
pub use request_id::{RequestId, RequestIdValue};
