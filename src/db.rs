/*
 * Responsibility
 * - PgPool の生成 (lazy: 起動時に接続を待たない)
 * - 起動後に一度だけ疎通確認してログに出す
 * - /health 用の ping
 */
use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

pub fn connect_lazy(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(database_url)
}

pub async fn ping(db: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(db).await?;
    Ok(())
}

/// Probe the pool once in the background; the server keeps starting either way.
pub fn spawn_probe(db: PgPool) {
    tokio::spawn(async move {
        match ping(&db).await {
            Ok(()) => tracing::info!("connected to database"),
            Err(err) => tracing::warn!(error = %err, "database is not reachable"),
        }
    });
}
