//! Storefront e-commerce backend library
//!
//! Admin/staff and customer authentication plus product CRUD, served over
//! actix-web with MySQL persistence.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use app::AppServices;
pub use modules::auth;
pub use modules::products;
