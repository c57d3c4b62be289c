/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access::apply(...), cors::apply(...), http::apply(...)
 */
pub mod auth;
pub mod cors;
pub mod http;
