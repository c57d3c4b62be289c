/*
 * Responsibility
 * - /users 系 handler
 * - GET /users: Authenticator が載せた identity (claims) をそのまま返す
 */
use axum::Json;

use crate::{
    api::extractors::{AuthUser, CurrentUser},
    error::AppError,
    services::auth::verifier::Claims,
};

pub async fn get_user(CurrentUser(user): CurrentUser) -> Result<Json<Claims>, AppError> {
    let AuthUser(claims) = user.ok_or(AppError::Unauthorized)?;

    Ok(Json(claims))
}
