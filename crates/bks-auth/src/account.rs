use bks_core::ID;
use bks_core::Unique;

/// Registered reader with verified identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    id: ID<Self>,
    username: String,
    email: String,
}

impl Account {
    pub fn new(id: ID<Self>, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Unique for Account {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
