/*
 * Responsibility
 * - /api 以下の URL 構造を定義
 * - products / orders / users の永続化系 route はここに増やしていく
 * - Authenticator は app.rs 側で auth_required に応じて layer する
 */
use axum::{Router, routing::get};

use crate::api::handlers::users::get_user;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    // Express の router mount と同じく `/api/users` と `/api/users/` の両方で受ける
    Router::new()
        .route("/users", get(get_user))
        .route("/users/", get(get_user))
}
