use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Configuration(format!("Invalid LOG_FORMAT: {}", other))),
        }
    }
}

/// How login tokens are minted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenMode {
    /// `admin-token-{id}` / `customer-token-{id}`, wire-compatible with existing clients
    Legacy,
    /// HMAC-SHA256 signed and expiring
    Signed,
}

impl FromStr for TokenMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(TokenMode::Legacy),
            "signed" => Ok(TokenMode::Signed),
            other => Err(AppError::Configuration(format!(
                "Invalid AUTH_TOKEN_MODE: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub token_mode: TokenMode,
    pub token_secret: Option<String>,
    pub token_ttl_hours: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Empty means any origin
    pub cors_allowed_origins: Vec<String>,
    /// Zero disables the limiter
    pub rate_limit_per_minute: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            auth: AuthConfig {
                token_mode: env::var("AUTH_TOKEN_MODE")
                    .unwrap_or_else(|_| "legacy".to_string())
                    .parse()?,
                token_secret: env::var("AUTH_TOKEN_SECRET").ok(),
                token_ttl_hours: env::var("AUTH_TOKEN_TTL_HOURS")
                    .unwrap_or_else(|_| "24".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid AUTH_TOKEN_TTL_HOURS".to_string())
                    })?,
            },
            http: HttpConfig {
                cors_allowed_origins: parse_origins(
                    &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
                ),
                rate_limit_per_minute: env::var("RATE_LIMIT_PER_MINUTE")
                    .unwrap_or_else(|_| "0".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid RATE_LIMIT_PER_MINUTE".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }

        if self.auth.token_mode == TokenMode::Signed {
            match self.auth.token_secret.as_deref() {
                Some(secret) if secret.len() >= 32 => {}
                Some(_) => {
                    return Err(AppError::Configuration(
                        "AUTH_TOKEN_SECRET must be at least 32 bytes".to_string(),
                    ))
                }
                None => {
                    return Err(AppError::Configuration(
                        "AUTH_TOKEN_SECRET is required when AUTH_TOKEN_MODE=signed".to_string(),
                    ))
                }
            }

            if self.auth.token_ttl_hours == 0 {
                return Err(AppError::Configuration(
                    "AUTH_TOKEN_TTL_HOURS must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Split a comma separated origin list. `*` or blank means any origin.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(str::to_string)
        .collect()
}
