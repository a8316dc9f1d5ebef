//! Application composition.
//!
//! Stores are handed to the services through their constructors, and the
//! route table is assembled here from each module's `configure`.

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::middleware::{json_config, not_found, path_config};
use crate::modules::auth::{AuthService, MySqlUserStore, TokenIssuer, UserStore};
use crate::modules::health;
use crate::modules::products::{MySqlProductStore, ProductService, ProductStore};
use crate::modules::{auth, products};

/// Services shared by every worker
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthService>,
    pub products: Arc<ProductService>,
}

impl AppServices {
    pub fn new(
        users: Arc<dyn UserStore>,
        product_store: Arc<ProductStore>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(users, tokens)),
            products: Arc::new(ProductService::new(product_store)),
        }
    }

    /// Wire the MySQL-backed stores
    pub fn with_mysql(pool: &MySqlPool, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self::new(
            Arc::new(MySqlUserStore::new(pool.clone())),
            Arc::new(MySqlProductStore::new(pool.clone())),
            tokens,
        )
    }

    /// Register services, extractor configs and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.auth.clone()))
            .app_data(web::Data::new(self.products.clone()))
            .app_data(json_config())
            .app_data(path_config())
            .configure(health::configure)
            .configure(auth::configure)
            .configure(products::configure)
            .default_service(web::to(not_found));
    }
}
