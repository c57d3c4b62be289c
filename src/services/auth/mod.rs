pub mod authenticator;
pub mod factory;
pub mod jwt;
pub mod verifier;

pub use authenticator::{AuthError, Authenticator};
pub use factory::build_authenticator;
