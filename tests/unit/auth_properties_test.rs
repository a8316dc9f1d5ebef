// Property-based tests for the login rules
//
// - Admin login rejects every (username, password) pair that is not stored
// - Admin login rejects stored customers even with correct credentials
// - Customer login is idempotent per mobile number

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::*;
use proptest::prelude::*;
use storefront::auth::{AuthService, Role};
use storefront::core::AppError;
use storefront::modules::auth::services::LegacyTokenIssuer;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn service_with(users: Arc<InMemoryUserStore>) -> AuthService {
    AuthService::new(users, Arc::new(LegacyTokenIssuer))
}

fn seeded_store() -> Arc<InMemoryUserStore> {
    let store = InMemoryUserStore::new();
    store.seed(admin("root", "correctpass"));
    store.seed(staff("clerk", "counter"));
    Arc::new(store)
}

proptest! {
    #[test]
    fn test_unknown_credentials_are_rejected(
        username in "[a-z]{1,12}",
        password in "[ -~]{0,16}",
    ) {
        prop_assume!(!(username == "root" && password == "correctpass"));
        prop_assume!(!(username == "clerk" && password == "counter"));

        let service = service_with(seeded_store());
        let result = runtime().block_on(service.admin_login(Some(&username), Some(&password)));

        prop_assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_customers_cannot_use_admin_login(
        username in "[a-z]{1,12}",
        password in "[a-zA-Z0-9]{1,16}",
        mobile in "\\+[0-9]{8,14}",
    ) {
        let store = seeded_store();
        prop_assume!(username != "root" && username != "clerk");
        store.seed(customer_with_password(&username, &password, &mobile));

        let service = service_with(store);
        let result = runtime().block_on(service.admin_login(Some(&username), Some(&password)));

        prop_assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_customer_login_is_idempotent(mobile in "[+0-9]{1,16}") {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store.clone());
        let rt = runtime();

        let first = rt.block_on(service.customer_login(&mobile)).unwrap();
        let second = rt.block_on(service.customer_login(&mobile)).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.token, format!("customer-token-{}", first.user_id));
        prop_assert_eq!(store.count(), 1);

        let user = &store.all()[0];
        prop_assert_eq!(&user.username, &mobile);
        prop_assert_eq!(user.password.as_str(), "");
        prop_assert_eq!(user.role, Role::Customer);
    }
}

#[test]
fn test_back_office_roles_get_admin_tokens() {
    let service = service_with(seeded_store());
    let rt = runtime();

    let admin = rt
        .block_on(service.admin_login(Some("root"), Some("correctpass")))
        .unwrap();
    assert_eq!(admin.token, "admin-token-1");
    assert_eq!(admin.role, Role::Admin);

    let staff = rt
        .block_on(service.admin_login(Some("clerk"), Some("counter")))
        .unwrap();
    assert_eq!(staff.token, "admin-token-2");
    assert_eq!(staff.role, Role::Staff);
}

#[test]
fn test_missing_fields_are_invalid_credentials() {
    let service = service_with(seeded_store());
    let rt = runtime();

    assert!(matches!(
        rt.block_on(service.admin_login(Some("root"), None)),
        Err(AppError::InvalidCredentials)
    ));
    assert!(matches!(
        rt.block_on(service.admin_login(None, Some("correctpass"))),
        Err(AppError::InvalidCredentials)
    ));
}

#[test]
fn test_credentials_are_case_sensitive() {
    let service = service_with(seeded_store());

    assert!(matches!(
        runtime().block_on(service.admin_login(Some("ROOT"), Some("correctpass"))),
        Err(AppError::InvalidCredentials)
    ));
}
