/// Factory: build `Authenticator` from application `Config`.
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::auth::{Authenticator, jwt::JwtVerifier};

pub fn build_authenticator(config: &Config) -> Result<Arc<Authenticator>, ConfigError> {
    let secret = config
        .jwt_secret
        .as_deref()
        .ok_or(ConfigError::Missing("JWT_SECRET"))?;

    let verifier = JwtVerifier::new(secret, config.jwt_leeway_seconds);

    Ok(Arc::new(Authenticator::new(
        Arc::new(verifier),
        config.auth_verify_timeout,
    )))
}
