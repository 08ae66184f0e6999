#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("username or email already exists")]
    Taken,
    #[error("no reader with id {0}")]
    Unknown(String),
}
