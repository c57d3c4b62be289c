/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: db: PgPool
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - Authenticator は state ではなく middleware 側の state として持つ (auth_required 次第で不要なため)
 */
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: sqlx::PgPool,
}

impl AppState {
    pub fn new(db: sqlx::PgPool) -> Self {
        Self { db }
    }
}
