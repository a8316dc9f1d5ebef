use serde::{Deserialize, Serialize};

use super::Role;

/// Body of `POST /api/auth/admin-login`.
///
/// Both fields are optional so that a missing one is reported as invalid
/// credentials instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub role: Role,
}

/// Body of `POST /api/auth/customer-login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerLoginRequest {
    pub mobile: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerLoginResponse {
    pub token: String,
    pub user_id: i64,
}
