use super::*;
use bks_auth::Account;
use bks_core::ID;
use bks_core::Unique;
use std::collections::HashMap;
use tokio::sync::RwLock;

struct Reader {
    account: Account,
    hashword: String,
    books: Vec<Book>,
}

/// In-memory directory of readers and their saved books.
#[derive(Default)]
pub struct Library {
    readers: RwLock<HashMap<ID<Account>, Reader>>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an account. Username and email must both be unused.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        hashword: String,
    ) -> Result<Account, LibraryError> {
        let mut readers = self.readers.write().await;
        if readers
            .values()
            .any(|r| r.account.username() == username || r.account.email() == email)
        {
            return Err(LibraryError::Taken);
        }
        let account = Account::new(ID::default(), username.to_string(), email.to_string());
        readers.insert(
            account.id(),
            Reader {
                account: account.clone(),
                hashword,
                books: Vec::new(),
            },
        );
        log::info!("registered reader {} ({})", account.username(), account.id());
        Ok(account)
    }

    /// Account and stored hashword for a login attempt.
    pub async fn lookup(&self, email: &str) -> Option<(Account, String)> {
        self.readers
            .read()
            .await
            .values()
            .find(|r| r.account.email() == email)
            .map(|r| (r.account.clone(), r.hashword.clone()))
    }

    pub async fn profile(&self, account: &str) -> Result<Profile, LibraryError> {
        let id = Self::key(account)?;
        self.readers
            .read()
            .await
            .get(&id)
            .map(|r| Profile::new(&r.account, &r.books))
            .ok_or_else(|| LibraryError::Unknown(account.to_string()))
    }

    /// Adds a book unless one with the same `book_id` is already saved.
    pub async fn save(&self, account: &str, book: Book) -> Result<Profile, LibraryError> {
        let id = Self::key(account)?;
        let mut readers = self.readers.write().await;
        let reader = readers
            .get_mut(&id)
            .ok_or_else(|| LibraryError::Unknown(account.to_string()))?;
        if !reader.books.iter().any(|b| b.book_id == book.book_id) {
            reader.books.push(book);
        }
        Ok(Profile::new(&reader.account, &reader.books))
    }

    /// Removes the book with this `book_id`; absent books are not an error.
    pub async fn remove(&self, account: &str, book_id: &str) -> Result<Profile, LibraryError> {
        let id = Self::key(account)?;
        let mut readers = self.readers.write().await;
        let reader = readers
            .get_mut(&id)
            .ok_or_else(|| LibraryError::Unknown(account.to_string()))?;
        reader.books.retain(|b| b.book_id != book_id);
        Ok(Profile::new(&reader.account, &reader.books))
    }

    /// Token ids are opaque strings; only ids this library minted resolve.
    fn key(account: &str) -> Result<ID<Account>, LibraryError> {
        account
            .parse()
            .map_err(|_| LibraryError::Unknown(account.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book {
            book_id: "dune-1965".to_string(),
            title: "Dune".to_string(),
            authors: vec!["Frank Herbert".to_string()],
            description: String::new(),
            image: String::new(),
            link: String::new(),
        }
    }

    #[tokio::test]
    async fn register_then_lookup() {
        let library = Library::new();
        let account = library
            .register("reader", "r@x.io", "hash".to_string())
            .await
            .unwrap();
        let (found, hashword) = library.lookup("r@x.io").await.unwrap();
        assert_eq!(found, account);
        assert_eq!(hashword, "hash");
        assert!(library.lookup("nobody@x.io").await.is_none());
    }

    #[tokio::test]
    async fn duplicate_username_or_email_is_taken() {
        let library = Library::new();
        library
            .register("reader", "r@x.io", "hash".to_string())
            .await
            .unwrap();
        let same_name = library.register("reader", "s@x.io", "hash".to_string()).await;
        let same_mail = library.register("other", "r@x.io", "hash".to_string()).await;
        assert!(matches!(same_name, Err(LibraryError::Taken)));
        assert!(matches!(same_mail, Err(LibraryError::Taken)));
    }

    #[tokio::test]
    async fn saving_twice_keeps_one_copy() {
        let library = Library::new();
        let account = library
            .register("reader", "r@x.io", "hash".to_string())
            .await
            .unwrap();
        library.save(&account.id().to_string(), dune()).await.unwrap();
        let profile = library.save(&account.id().to_string(), dune()).await.unwrap();
        assert_eq!(profile.book_count, 1);
        assert_eq!(profile.saved_books, vec![dune()]);
    }

    #[tokio::test]
    async fn remove_drops_matching_book() {
        let library = Library::new();
        let account = library
            .register("reader", "r@x.io", "hash".to_string())
            .await
            .unwrap();
        library.save(&account.id().to_string(), dune()).await.unwrap();
        let profile = library.remove(&account.id().to_string(), "dune-1965").await.unwrap();
        assert_eq!(profile.book_count, 0);
        let profile = library.remove(&account.id().to_string(), "dune-1965").await.unwrap();
        assert!(profile.saved_books.is_empty());
    }

    #[tokio::test]
    async fn unknown_account_is_reported() {
        let library = Library::new();
        let ghost = ID::<Account>::default().to_string();
        assert!(matches!(
            library.profile(&ghost).await,
            Err(LibraryError::Unknown(id)) if id == ghost
        ));
        assert!(library.save(&ghost, dune()).await.is_err());
    }

    #[tokio::test]
    async fn foreign_id_is_unknown() {
        let library = Library::new();
        library
            .register("reader", "r@x.io", "hash".to_string())
            .await
            .unwrap();
        let foreign = "507f1f77bcf86cd799439011";
        assert!(matches!(
            library.profile(foreign).await,
            Err(LibraryError::Unknown(id)) if id == foreign
        ));
        assert!(matches!(
            library.remove(foreign, "dune-1965").await,
            Err(LibraryError::Unknown(_))
        ));
    }

    #[test]
    fn profile_serializes_camel_case() {
        let account = Account::new(ID::default(), "reader".to_string(), "r@x.io".to_string());
        let json = serde_json::to_value(Profile::new(&account, &[dune()])).unwrap();
        assert_eq!(json["_id"], account.id().to_string());
        assert_eq!(json["bookCount"], 1);
        assert_eq!(json["savedBooks"][0]["bookId"], "dune-1965");
    }
}
