use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::auth::models::{NewUser, User};

/// Persistence seam for user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact match on both fields
    async fn find_by_username_and_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>>;

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>>;

    /// Insert a new user. A duplicate mobile yields `AppError::Conflict`.
    async fn save(&self, user: NewUser) -> Result<User>;
}

/// MySQL-backed user store
#[derive(Clone)]
pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn find_by_username_and_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, mobile, role
            FROM users
            WHERE username = ? AND password = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, mobile, role
            FROM users
            WHERE mobile = ?
            "#,
        )
        .bind(mobile)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn save(&self, user: NewUser) -> Result<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password, mobile, role)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.mobile)
        .bind(user.role.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "User with this mobile"))?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("User id out of range"))?;

        Ok(user.with_id(id))
    }
}
