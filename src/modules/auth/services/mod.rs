pub mod auth_service;
pub mod token_issuer;

pub use auth_service::AuthService;
pub use token_issuer::{
    issuer_from_config, Audience, LegacyTokenIssuer, SignedTokenIssuer, TokenClaims, TokenIssuer,
};
