use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::Product;
use crate::modules::products::services::ProductService;

/// List all products
/// GET /api/products
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
) -> Result<HttpResponse, AppError> {
    let products = service.list_products().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Create a product
/// POST /api/products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    product: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let product = service.create_product(product.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Replace a product
/// PUT /api/products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    product: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let product = service
        .update_product(path.into_inner(), product.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Delete a product
/// DELETE /api/products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_product(path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .route("", web::get().to(list_products))
            .route("", web::post().to(create_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
