use super::*;
use bks_core::Unique;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Shape checks shared by both registration entry points.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.len() < 3 || self.username.len() > 32 {
            return Err("username must be 3-32 characters");
        }
        if !self.email.contains('@') {
            return Err("must use a valid email address");
        }
        if self.password.len() < 8 {
            return Err("password must be at least 8 characters");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&Account> for UserInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            username: account.username().to_string(),
            email: account.email().to_string(),
        }
    }
}
