use super::*;
use bks_core::ID;

/// JWT payload. The account id travels as `_id` and is opaque here:
/// any string the issuer chose verifies, whatever store minted it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub username: String,
    pub email: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub iat: u64,
    pub exp: u64,
}

impl Claims {
    pub fn new(username: String, email: String, account: ID<Account>) -> Self {
        let now = bks_core::epoch();
        Self {
            username,
            email,
            id: account.to_string(),
            iat: now,
            exp: now + bks_core::TOKEN_LIFETIME.as_secs(),
        }
    }
    /// Expired once the clock reaches `exp`, not one second after.
    pub fn expired(&self, now: u64) -> bool {
        self.exp <= now
    }
}
