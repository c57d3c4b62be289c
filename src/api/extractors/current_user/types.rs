/*
 * Responsibility
 * - request context の `user` に相当する型
 * - middleware が検証済み claims を request extensions に格納し、handler はこの型だけを受け取る
 */
use crate::services::auth::verifier::Claims;

/// 検証済みトークンの claims (発行者が入れたものをそのまま保持)
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser(pub Claims);
