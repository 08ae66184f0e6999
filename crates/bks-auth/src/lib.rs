//! Token issuance, verification, and request identity.
//!
//! One signing key, one verification routine, and two ways of applying it
//! to an inbound call: a hard gate for REST scopes and a soft context builder
//! for the query entry point.
//!
//! ## Credentials
//!
//! - [`Crypto`] — JWT signing ([`Crypto::issue`]) and verification ([`Crypto::verify`])
//! - [`Claims`] — JWT payload structure
//! - [`Inbound`] — token lookup across body, query string, and header
//! - [`OnFailure`] — whether a bad credential rejects or degrades to anonymous
//!
//! ## Identity
//!
//! - [`Account`] — registered reader
//! - [`Identity`] — what a verified token says about the caller
//! - [`Context`] — per-call identity for query resolvers
//!
//! ## Passwords
//!
//! - [`password`] — Argon2 hashing and verification
mod account;
mod claims;
mod crypto;
mod dto;
mod error;
mod identity;
mod inbound;
pub mod password;
mod policy;

pub use account::*;
pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use identity::*;
pub use inbound::*;
pub use policy::*;

#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use middleware::*;
