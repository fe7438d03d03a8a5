//! # drive-auth
//!
//! Identity collaborator for Drive. Requests carry an HS256-signed JWT
//! whose `sub` claim is the user id of the external identity system;
//! this crate issues and validates those tokens.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
