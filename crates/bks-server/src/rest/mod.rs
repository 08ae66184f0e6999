//! Conventional endpoints. Everything under `/api` sits behind [`bks_auth::guard`].
use super::*;

pub mod handlers;
pub use handlers::*;
