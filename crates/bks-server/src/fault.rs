use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;
use bks_auth::AuthError;
use bks_auth::MISSING_MESSAGE;
use bks_library::LibraryError;

/// Everything a handler or resolver can refuse with.
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    #[error("{}", MISSING_MESSAGE)]
    Unauthenticated,
    #[error("No user found with this email address")]
    NoUser,
    #[error("Incorrect credentials")]
    Incorrect,
    #[error("{0}")]
    Rejected(&'static str),
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("could not hash password: {0}")]
    Hashing(String),
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl Fault {
    /// Client-facing message. Credential errors keep their generic wording.
    pub fn message(&self) -> String {
        match self {
            Self::Auth(e) => e.message().to_string(),
            _ => self.to_string(),
        }
    }
    /// Machine-readable code for query replies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated | Self::NoUser | Self::Incorrect => "UNAUTHENTICATED",
            Self::Auth(AuthError::Signing(_)) => "INTERNAL_SERVER_ERROR",
            Self::Auth(_) => "UNAUTHENTICATED",
            Self::Rejected(_) | Self::Malformed(_) | Self::Library(LibraryError::Taken) => {
                "BAD_USER_INPUT"
            }
            Self::Library(LibraryError::Unknown(_)) => "NOT_FOUND",
            Self::Hashing(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ResponseError for Fault {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated | Self::NoUser | Self::Incorrect => StatusCode::UNAUTHORIZED,
            Self::Rejected(_) | Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::Library(LibraryError::Taken) => StatusCode::CONFLICT,
            Self::Library(LibraryError::Unknown(_)) => StatusCode::NOT_FOUND,
            Self::Auth(e) => e.status_code(),
            Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "message": self.message() }))
    }
}
