/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, JWT_SECRET, CORS 許可、Auth 設定など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // false のとき Authenticator を pipeline に登録しない (全リクエスト匿名)
    pub auth_required: bool,
    pub jwt_secret: Option<String>,
    pub jwt_leeway_seconds: u64,
    pub auth_verify_timeout: Duration,

    // HTTP 層の上限 (middleware::http)
    pub body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the secret or the connection string
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("auth_required", &self.auth_required)
            .field("jwt_leeway_seconds", &self.jwt_leeway_seconds)
            .field("auth_verify_timeout", &self.auth_verify_timeout)
            .field("body_limit_bytes", &self.body_limit_bytes)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (env in production, a map in tests).
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&var, "PORT", 3000)?;

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url = var("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let app_env = AppEnv::parse(var("APP_ENV"));

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let auth_required = match var("AUTH_REQUIRED") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("AUTH_REQUIRED"))?,
        };

        let jwt_secret = var("JWT_SECRET").filter(|s| !s.is_empty());
        if auth_required && jwt_secret.is_none() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }

        let jwt_leeway_seconds = parse_or(&var, "JWT_LEEWAY_SECONDS", 0u64)?;

        let verify_timeout_ms = parse_or(&var, "AUTH_VERIFY_TIMEOUT_MS", 2000u64)?;
        if verify_timeout_ms == 0 {
            return Err(ConfigError::Invalid("AUTH_VERIFY_TIMEOUT_MS"));
        }

        let body_limit_bytes = parse_or(&var, "HTTP_BODY_LIMIT_BYTES", 1024 * 1024usize)?;
        if body_limit_bytes == 0 {
            return Err(ConfigError::Invalid("HTTP_BODY_LIMIT_BYTES"));
        }

        let request_timeout_ms = parse_or(&var, "HTTP_REQUEST_TIMEOUT_MS", 30_000u64)?;
        if request_timeout_ms == 0 {
            return Err(ConfigError::Invalid("HTTP_REQUEST_TIMEOUT_MS"));
        }

        Ok(Self {
            addr,
            database_url,
            app_env,
            cors_allowed_origins,
            auth_required,
            jwt_secret,
            jwt_leeway_seconds,
            auth_verify_timeout: Duration::from_millis(verify_timeout_ms),
            body_limit_bytes,
            request_timeout: Duration::from_millis(request_timeout_ms),
        })
    }
}

fn parse_or<F, T>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Config with the required keys filled in; `overrides` win over them.
    pub(crate) fn test_config(overrides: &[(&str, &str)]) -> Config {
        let mut pairs = vec![
            ("DATABASE_URL", "postgres://storefront@127.0.0.1:1/storefront"),
            ("JWT_SECRET", "test-secret"),
        ];
        pairs.extend_from_slice(overrides);
        Config::from_lookup(lookup(&pairs)).unwrap()
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_required_keys_are_set() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.auth_required);
        assert_eq!(config.jwt_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.jwt_leeway_seconds, 0);
        assert_eq!(config.auth_verify_timeout, Duration::from_millis(2000));
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.body_limit_bytes, 1024 * 1024);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_database_url_fails() {
        let err = Config::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn secret_is_required_only_when_auth_is_required() {
        let err =
            Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/shop")]))
                .unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));

        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("JWT_SECRET", ""),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));

        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("AUTH_REQUIRED", "false"),
        ]))
        .unwrap();
        assert!(!config.auth_required);
        assert!(config.jwt_secret.is_none());
    }

    #[test]
    fn typed_keys_reject_garbage() {
        let base = [
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("JWT_SECRET", "s3cret"),
        ];

        let cases = [
            ("PORT", "http", "PORT"),
            ("AUTH_REQUIRED", "maybe", "AUTH_REQUIRED"),
            ("AUTH_VERIFY_TIMEOUT_MS", "0", "AUTH_VERIFY_TIMEOUT_MS"),
            ("AUTH_VERIFY_TIMEOUT_MS", "-5", "AUTH_VERIFY_TIMEOUT_MS"),
            ("JWT_LEEWAY_SECONDS", "soon", "JWT_LEEWAY_SECONDS"),
            ("HTTP_BODY_LIMIT_BYTES", "0", "HTTP_BODY_LIMIT_BYTES"),
            ("HTTP_REQUEST_TIMEOUT_MS", "0", "HTTP_REQUEST_TIMEOUT_MS"),
            ("HTTP_REQUEST_TIMEOUT_MS", "1s", "HTTP_REQUEST_TIMEOUT_MS"),
        ];

        for (key, value, expected) in cases {
            let mut pairs = base.to_vec();
            pairs.push((key, value));
            let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
            assert_eq!(err, ConfigError::Invalid(expected), "{key}={value}");
        }
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("JWT_SECRET", "s3cret"),
            ("PORT", "8080"),
            ("APP_ENV", "PROD"),
            ("CORS_ALLOWED_ORIGINS", "https://shop.example, ,https://admin.example"),
            ("AUTH_REQUIRED", "Yes"),
            ("JWT_LEEWAY_SECONDS", "30"),
            ("AUTH_VERIFY_TIMEOUT_MS", "250"),
            ("HTTP_BODY_LIMIT_BYTES", "4096"),
            ("HTTP_REQUEST_TIMEOUT_MS", "1500"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://shop.example", "https://admin.example"]
        );
        assert!(config.auth_required);
        assert_eq!(config.jwt_leeway_seconds, 30);
        assert_eq!(config.auth_verify_timeout, Duration::from_millis(250));
        assert_eq!(config.body_limit_bytes, 4096);
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn config_error_messages_name_the_key() {
        assert_eq!(
            ConfigError::Missing("JWT_SECRET").to_string(),
            "missing configuration: JWT_SECRET"
        );
        assert_eq!(
            ConfigError::Invalid("PORT").to_string(),
            "invalid configuration: PORT"
        );
    }

    #[test]
    fn debug_output_hides_secret() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://user:pw@localhost/shop"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        let printed = format!("{config:?}");
        assert!(!printed.contains("s3cret"));
        assert!(!printed.contains("pw@"));
    }
}
