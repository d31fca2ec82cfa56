//! # securelink-auth
//!
//! Thin identity layer. SecureLink does not authenticate users itself;
//! an external identity provider mints HMAC-signed JWTs and this crate
//! validates them and extracts the stable owner id (the `sub` claim).
//!
//! The encoder exists for the test suite and for deployments where the
//! provider shares the signing secret.

pub mod jwt;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
