use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::services::auth::verifier::{Claims, TokenVerifier, VerifyError};

/// HS256 JWT verifier keyed by the process-wide shared secret.
///
/// - Key material is intentionally not printable via Debug.
/// - `exp` / `nbf` are checked when present but not required.
/// - `aud` / `iss` are not constrained: claims are opaque to this service.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtVerifier {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    // Signature + time-based checks, then hand back the whole payload.
    pub fn decode(&self, token: &str) -> Result<Claims, VerifyError> {
        let data = jsonwebtoken::decode::<serde_json::Value>(
            token,
            &self.decoding_key,
            &self.validation,
        )?;

        match data.claims {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(VerifyError::NotAnObject),
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        self.decode(token)
    }
}
