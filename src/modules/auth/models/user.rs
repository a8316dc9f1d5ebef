use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::AppError;

/// Account role, gating which login path accepts a user.
/// Stored as its upper-case name in a VARCHAR column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl Role {
    /// Roles accepted by the admin login endpoint
    pub fn is_back_office(self) -> bool {
        matches!(self, Role::Admin | Role::Staff)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Staff => write!(f, "STAFF"),
            Role::Customer => write!(f, "CUSTOMER"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "STAFF" => Ok(Role::Staff),
            "CUSTOMER" => Ok(Role::Customer),
            _ => Err(AppError::internal(format!("Invalid role: {}", s))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = AppError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Stored user account
///
/// The password is compared as stored; customers created by mobile login
/// carry an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub mobile: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
}

/// User record not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub mobile: Option<String>,
    pub role: Role,
}

impl NewUser {
    /// Customer registered implicitly by a first mobile login
    pub fn customer(mobile: &str) -> Self {
        Self {
            username: mobile.to_string(),
            password: String::new(),
            mobile: Some(mobile.to_string()),
            role: Role::Customer,
        }
    }

    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            mobile: self.mobile,
            role: self.role,
        }
    }
}
