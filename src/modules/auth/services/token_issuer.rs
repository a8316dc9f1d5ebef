//! Login token minting.
//!
//! Two schemes share the [`TokenIssuer`] seam. [`LegacyTokenIssuer`] produces
//! `admin-token-{id}` / `customer-token-{id}`: guessable, unsigned and
//! non-expiring, kept because existing clients parse it. [`SignedTokenIssuer`]
//! appends an expiry and an HMAC-SHA256 tag so tokens cannot be forged by
//! swapping the id.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::{AuthConfig, TokenMode};
use crate::core::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Which login path a token was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Admin,
    Customer,
}

impl Audience {
    pub fn prefix(self) -> &'static str {
        match self {
            Audience::Admin => "admin-token-",
            Audience::Customer => "customer-token-",
        }
    }

    fn strip(token: &str) -> Option<(Audience, &str)> {
        [Audience::Admin, Audience::Customer]
            .into_iter()
            .find_map(|audience| token.strip_prefix(audience.prefix()).map(|rest| (audience, rest)))
    }
}

/// What a verified token says about its bearer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub audience: Audience,
    pub user_id: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

pub trait TokenIssuer: Send + Sync {
    fn issue(&self, audience: Audience, user_id: i64) -> Result<String>;

    fn verify(&self, token: &str) -> Result<TokenClaims>;
}

/// Build the issuer selected by configuration
pub fn issuer_from_config(config: &AuthConfig) -> Result<Arc<dyn TokenIssuer>> {
    match config.token_mode {
        TokenMode::Legacy => Ok(Arc::new(LegacyTokenIssuer)),
        TokenMode::Signed => {
            let secret = config.token_secret.as_deref().ok_or_else(|| {
                AppError::Configuration("AUTH_TOKEN_SECRET not set".to_string())
            })?;
            Ok(Arc::new(SignedTokenIssuer::new(
                secret.as_bytes(),
                Duration::hours(i64::from(config.token_ttl_hours)),
            )))
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyTokenIssuer;

impl TokenIssuer for LegacyTokenIssuer {
    fn issue(&self, audience: Audience, user_id: i64) -> Result<String> {
        Ok(format!("{}{}", audience.prefix(), user_id))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims> {
        let (audience, id) =
            Audience::strip(token).ok_or_else(|| AppError::unauthorized("Malformed token"))?;
        let user_id = id
            .parse()
            .map_err(|_| AppError::unauthorized("Malformed token"))?;

        Ok(TokenClaims {
            audience,
            user_id,
            expires_at: None,
        })
    }
}

pub struct SignedTokenIssuer {
    secret: Vec<u8>,
    ttl: Duration,
}

impl SignedTokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            secret: secret.to_vec(),
            ttl,
        }
    }

    pub fn issue_at(&self, audience: Audience, user_id: i64, now: DateTime<Utc>) -> Result<String> {
        let expires = (now + self.ttl).timestamp();
        let payload = format!("{}{}.{}", audience.prefix(), user_id, expires);
        let tag = hex::encode(self.mac(&payload)?.finalize().into_bytes());

        Ok(format!("{}.{}", payload, tag))
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims> {
        let malformed = || AppError::unauthorized("Malformed token");

        let (payload, tag) = token.rsplit_once('.').ok_or_else(malformed)?;
        let tag = hex::decode(tag).map_err(|_| malformed())?;
        self.mac(payload)?
            .verify_slice(&tag)
            .map_err(|_| AppError::unauthorized("Invalid token signature"))?;

        let (audience, rest) = Audience::strip(payload).ok_or_else(malformed)?;
        let (id, expires) = rest.split_once('.').ok_or_else(malformed)?;
        let user_id: i64 = id.parse().map_err(|_| malformed())?;
        let expires_at = expires
            .parse::<i64>()
            .ok()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .ok_or_else(malformed)?;

        if expires_at <= now {
            return Err(AppError::unauthorized("Token expired"));
        }

        Ok(TokenClaims {
            audience,
            user_id,
            expires_at: Some(expires_at),
        })
    }

    fn mac(&self, payload: &str) -> Result<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AppError::internal(format!("Invalid token key: {}", e)))?;
        mac.update(payload.as_bytes());
        Ok(mac)
    }
}

impl TokenIssuer for SignedTokenIssuer {
    fn issue(&self, audience: Audience, user_id: i64) -> Result<String> {
        self.issue_at(audience, user_id, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<TokenClaims> {
        self.verify_at(token, Utc::now())
    }
}
