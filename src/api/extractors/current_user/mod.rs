/*!
 * Current user extractor
 *
 * Responsibility:
 * - Authenticator が載せた identity (AuthUser) を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 */

mod core;
mod types;

pub use self::core::CurrentUser;
pub use self::types::AuthUser;
