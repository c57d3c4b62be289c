use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::AuthUser;

/// Handler で、リクエストの identity を受け取るための extractor
///
/// - 匿名リクエスト (ヘッダなし / auth_required = false) では `None`
/// - 失敗しない: 拒否は middleware 側で済んでいる
pub struct CurrentUser(pub Option<AuthUser>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(parts.extensions.get::<AuthUser>().cloned()))
    }
}
