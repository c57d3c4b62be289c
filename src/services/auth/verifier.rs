use async_trait::async_trait;
use thiserror::Error;

/// Decoded payload of a verified token.
///
/// Whatever the issuer put in the token, kept as-is.
pub type Claims = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("token rejected: {0}")]
    Rejected(#[from] jsonwebtoken::errors::Error),

    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// Token verification primitive.
///
/// Given a raw token string, returns the decoded claims or a failure. Bad signature,
/// malformed token and expired token are all failures; callers do not distinguish them.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Claims, VerifyError>;
}
