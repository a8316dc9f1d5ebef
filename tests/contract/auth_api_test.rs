// Contract tests for /api/auth
//
// Validate status codes and JSON shapes of both login endpoints against
// the wire format existing clients depend on.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use helpers::*;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_admin_login_success_shape() {
    let ctx = TestContext::new();
    ctx.users.seed(admin("root", "correctpass"));
    let app = test::init_service(App::new().configure(|cfg| ctx.services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/admin-login")
        .set_json(json!({ "username": "root", "password": "correctpass" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "token": "admin-token-1", "role": "ADMIN" }));
}

#[actix_web::test]
async fn test_admin_login_wrong_password() {
    let ctx = TestContext::new();
    ctx.users.seed(admin("root", "correctpass"));
    let app = test::init_service(App::new().configure(|cfg| ctx.services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/admin-login")
        .set_json(json!({ "username": "root", "password": "wrongpass" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Invalid credentials" }));
}

#[actix_web::test]
async fn test_admin_login_failures_are_indistinguishable() {
    let ctx = TestContext::new();
    ctx.users
        .seed(customer_with_password("shopper", "secret", "+15550001111"));
    let app = test::init_service(App::new().configure(|cfg| ctx.services.configure(cfg))).await;

    let mut bodies = Vec::new();
    for payload in [
        json!({ "username": "shopper", "password": "secret" }),
        json!({ "username": "nobody", "password": "secret" }),
        json!({ "username": "shopper" }),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/admin-login")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        bodies.push(test::read_body(resp).await);
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[actix_web::test]
async fn test_customer_login_on_empty_store() {
    let ctx = TestContext::new();
    let app = test::init_service(App::new().configure(|cfg| ctx.services.configure(cfg))).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/auth/customer-login")
            .set_json(json!({ "mobile": "+15551234567" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "token": "customer-token-1", "userId": 1 }));
    }

    assert_eq!(ctx.users.count(), 1);
}

#[actix_web::test]
async fn test_customer_login_requires_mobile_field() {
    let ctx = TestContext::new();
    let app = test::init_service(App::new().configure(|cfg| ctx.services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/customer-login")
        .set_json(json!({ "phone": "+15551234567" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(ctx.users.count(), 0);
}
