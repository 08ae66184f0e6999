use jsonwebtoken::errors::ErrorKind;

/// Shown when a protected call arrives without any credential.
pub const MISSING_MESSAGE: &str = "You need to be logged in!";
/// Shown for every verification failure, expired or otherwise.
pub const INVALID_MESSAGE: &str = "Invalid token!";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no credential in body, query, or authorization header")]
    Missing,
    #[error("credential failed verification: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
    #[error("credential expired")]
    Expired,
    #[error("cannot sign credential: {0}")]
    Signing(String),
}

impl AuthError {
    /// Client-facing message. Verification failures collapse into one string;
    /// the precise kind only reaches the logs.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing => MISSING_MESSAGE,
            Self::Invalid(_) | Self::Expired => INVALID_MESSAGE,
            Self::Signing(_) => "Could not issue token",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        match error.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid(error),
        }
    }
}
