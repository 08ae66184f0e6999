use super::*;
use bks_auth::Account;
use bks_core::Unique;
use serde::Serialize;

/// Public view of a reader and their shelf.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub saved_books: Vec<Book>,
    pub book_count: usize,
}

impl Profile {
    pub fn new(account: &Account, books: &[Book]) -> Self {
        Self {
            id: account.id().to_string(),
            username: account.username().to_string(),
            email: account.email().to_string(),
            saved_books: books.to_vec(),
            book_count: books.len(),
        }
    }
}
