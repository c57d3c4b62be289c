//! Bearer token 検証 → AuthUser を extensions に入れる
//!
//! - `Authorization` ヘッダなし: 匿名のまま次へ
//! - `Authorization: Bearer <jwt>`: 検証 OK なら claims を AuthUser として格納して次へ
//! - それ以外 (scheme 違い / 検証失敗 / タイムアウト): ここでレスポンスを返し、次には進まない

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthUser;
use crate::error::AppError;
use crate::services::auth::{AuthError, Authenticator};

/// Router 全体に Authenticator を掛ける。
///
/// 例：
/// ```ignore
/// let api = api::routes();
/// let api = middleware::auth::access::apply(api, authenticator);
/// app = app.nest("/api", api);
/// ```
pub fn apply<S>(router: Router<S>, authenticator: Arc<Authenticator>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(
        authenticator,
        access_middleware,
    ))
}

async fn access_middleware(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let authorization = match req.headers().get(header::AUTHORIZATION) {
        None => None,
        // 非 ASCII のヘッダは scheme を判定できないので malformed 扱い
        Some(v) => Some(v.to_str().map_err(|_| AppError::from(AuthError::MalformedHeader))?),
    };

    let claims = match authenticator.authenticate(authorization).await {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, path = %req.uri().path(), "request rejected");
            return Err(err.into());
        }
    };

    if let Some(claims) = claims {
        // middleware → extractor への受け渡し
        req.extensions_mut().insert(AuthUser(claims));
    }

    Ok(next.run(req).await)
}
