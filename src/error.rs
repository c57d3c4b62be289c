/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body `{"message": ...}`)
 * - auth error を統一的に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid token")]
    InvalidToken,
    #[error("malformed authorization header")]
    MalformedHeader,
    #[error("token verification timed out")]
    VerificationTimeout,
    #[error("unauthorized")]
    Unauthorized,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidToken | AppError::MalformedHeader | AppError::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            AppError::VerificationTimeout => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MalformedHeader => AppError::MalformedHeader,
            AuthError::InvalidToken => AppError::InvalidToken,
            AuthError::Timeout => AppError::VerificationTimeout,
        }
    }
}
