use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::auth::models::{AdminLoginResponse, CustomerLoginResponse, NewUser, User};
use crate::modules::auth::repositories::UserStore;

use super::token_issuer::{Audience, TokenIssuer};

/// Login flows for back-office users and customers
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { users, tokens }
    }

    /// Admin/staff login.
    ///
    /// Unknown user, wrong password and a non back-office role all produce
    /// the same `InvalidCredentials` error.
    pub async fn admin_login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AdminLoginResponse> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(AppError::InvalidCredentials);
        };

        let user = self
            .users
            .find_by_username_and_password(username, password)
            .await?
            .filter(|user| user.role.is_back_office())
            .ok_or_else(|| {
                warn!(username = %username, "Rejected admin login");
                AppError::InvalidCredentials
            })?;

        info!(user_id = user.id, role = %user.role, "Admin login");

        Ok(AdminLoginResponse {
            token: self.tokens.issue(Audience::Admin, user.id)?,
            role: user.role,
        })
    }

    /// Customer login by mobile number, registering the customer on first
    /// contact. Password and mobile format are not checked.
    pub async fn customer_login(&self, mobile: &str) -> Result<CustomerLoginResponse> {
        let user = self.find_or_register(mobile).await?;

        Ok(CustomerLoginResponse {
            token: self.tokens.issue(Audience::Customer, user.id)?,
            user_id: user.id,
        })
    }

    async fn find_or_register(&self, mobile: &str) -> Result<User> {
        if let Some(user) = self.users.find_by_mobile(mobile).await? {
            return Ok(user);
        }

        match self.users.save(NewUser::customer(mobile)).await {
            Ok(user) => {
                info!(user_id = user.id, "Registered customer");
                Ok(user)
            }
            // Lost the race against a concurrent first login; the winner's row is the account
            Err(AppError::Conflict(_)) => self
                .users
                .find_by_mobile(mobile)
                .await?
                .ok_or_else(|| AppError::internal("Customer vanished after mobile conflict")),
            Err(e) => Err(e),
        }
    }
}
