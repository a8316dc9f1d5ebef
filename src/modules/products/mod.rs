// Products module: pass-through CRUD over the catalog

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::Product;
pub use repositories::{MySqlProductStore, ProductStore};
pub use services::ProductService;
