use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::auth::models::{AdminLoginRequest, CustomerLoginRequest};
use crate::modules::auth::services::AuthService;

/// Admin/staff login
/// POST /api/auth/admin-login
pub async fn admin_login(
    service: web::Data<Arc<AuthService>>,
    request: web::Json<AdminLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let response = service
        .admin_login(request.username.as_deref(), request.password.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Customer login, registering unseen mobile numbers
/// POST /api/auth/customer-login
pub async fn customer_login(
    service: web::Data<Arc<AuthService>>,
    request: web::Json<CustomerLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.customer_login(&request.mobile).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Configure auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/admin-login", web::post().to(admin_login))
            .route("/customer-login", web::post().to(customer_login)),
    );
}
