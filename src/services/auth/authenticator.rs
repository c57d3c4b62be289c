use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::services::auth::verifier::{Claims, TokenVerifier};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("malformed authorization header")]
    MalformedHeader,

    #[error("invalid token")]
    InvalidToken,

    #[error("token verification timed out")]
    Timeout,
}

/// Parse an `Authorization` header value into its bearer token.
///
/// The value is split on the first space; the scheme must be exactly `Bearer`
/// and the rest must be a single non-empty token.
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let (scheme, token) = value.split_once(' ').ok_or(AuthError::MalformedHeader)?;

    if scheme != "Bearer" {
        return Err(AuthError::MalformedHeader);
    }
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

/// Request Authenticator.
///
/// Holds no per-request state: the verifier (and the secret behind it) is read-only
/// and shared across requests.
#[derive(Clone)]
pub struct Authenticator {
    verifier: Arc<dyn TokenVerifier>,
    verify_timeout: Duration,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("verify_timeout", &self.verify_timeout)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    pub fn new(verifier: Arc<dyn TokenVerifier>, verify_timeout: Duration) -> Self {
        Self {
            verifier,
            verify_timeout,
        }
    }

    /// Decide what identity a request carries.
    ///
    /// - `Ok(None)`: no header, anonymous request
    /// - `Ok(Some(claims))`: header present and token verified
    /// - `Err(_)`: reject the request
    pub async fn authenticate(&self, header: Option<&str>) -> Result<Option<Claims>, AuthError> {
        let Some(value) = header else {
            return Ok(None);
        };

        let token = parse_bearer(value)?;

        match tokio::time::timeout(self.verify_timeout, self.verifier.verify(token)).await {
            Ok(Ok(claims)) => Ok(Some(claims)),
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "token verification failed");
                Err(AuthError::InvalidToken)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.verify_timeout.as_millis() as u64,
                    "token verification timed out"
                );
                Err(AuthError::Timeout)
            }
        }
    }
}
