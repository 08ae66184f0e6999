use super::*;

/// Who a verified token says the caller is.
/// Carries every payload field; consumers project what they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    account: String,
    username: String,
    email: String,
}

impl Identity {
    /// Opaque account id, exactly as it was signed.
    pub fn account(&self) -> &str {
        &self.account
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            account: claims.id,
            username: claims.username,
            email: claims.email,
        }
    }
}

/// Per-call context handed to query resolvers.
/// An absent user means an anonymous caller; resolvers decide what that may do.
#[derive(Debug, Clone, Default)]
pub struct Context {
    user: Option<Identity>,
}

impl Context {
    /// Never fails. Missing or bad credentials yield an anonymous context.
    pub fn build(crypto: &Crypto, inbound: &Inbound<'_>) -> Self {
        Self {
            user: crypto
                .authenticate(inbound, OnFailure::PassThroughAnonymous)
                .unwrap_or_default(),
        }
    }
    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bks_core::ID;

    #[test]
    fn no_token_builds_anonymous_context() {
        let crypto = Crypto::new(b"shelf-secret").unwrap();
        let context = Context::build(&crypto, &Inbound::default());
        assert!(context.user().is_none());
    }

    #[test]
    fn bad_token_builds_anonymous_context() {
        let crypto = Crypto::new(b"shelf-secret").unwrap();
        let inbound = Inbound::new(b"", "", Some("Bearer nonsense"));
        let context = Context::build(&crypto, &inbound);
        assert!(context.user().is_none());
    }

    #[test]
    fn valid_token_attaches_identity() {
        let crypto = Crypto::new(b"shelf-secret").unwrap();
        let account = ID::<Account>::default();
        let token = crypto.issue("reader", "r@x.io", account).unwrap();
        let query = format!("token={}", token);
        let context = Context::build(&crypto, &Inbound::new(b"", &query, None));
        let user = context.user().unwrap();
        assert_eq!(user.account(), account.to_string());
        assert_eq!(user.username(), "reader");
    }
}
