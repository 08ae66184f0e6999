use super::*;

/// What a pipeline does with a caller whose credential is missing or bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Surface the error; the caller is turned away.
    Reject,
    /// Log and continue with no identity.
    PassThroughAnonymous,
}

impl Crypto {
    /// Locate, verify, and project the caller's credential.
    ///
    /// Under [`OnFailure::Reject`] every failure is returned as `Err`.
    /// Under [`OnFailure::PassThroughAnonymous`] this never fails and
    /// `Ok(None)` stands for an anonymous caller.
    pub fn authenticate(
        &self,
        inbound: &Inbound<'_>,
        policy: OnFailure,
    ) -> Result<Option<Identity>, AuthError> {
        let outcome = inbound
            .token()
            .ok_or(AuthError::Missing)
            .and_then(|token| self.verify(&token));
        match (outcome, policy) {
            (Ok(identity), _) => Ok(Some(identity)),
            (Err(e), OnFailure::Reject) => Err(e),
            (Err(AuthError::Missing), OnFailure::PassThroughAnonymous) => Ok(None),
            (Err(e), OnFailure::PassThroughAnonymous) => {
                log::warn!("continuing as anonymous caller: {}", e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bks_core::ID;

    fn crypto() -> Crypto {
        Crypto::new(b"shelf-secret").unwrap()
    }

    #[test]
    fn reject_surfaces_missing() {
        let result = crypto().authenticate(&Inbound::default(), OnFailure::Reject);
        assert!(matches!(result, Err(AuthError::Missing)));
    }

    #[test]
    fn reject_surfaces_invalid() {
        let inbound = Inbound::new(b"", "token=forged", None);
        let result = crypto().authenticate(&inbound, OnFailure::Reject);
        assert!(matches!(result, Err(AuthError::Invalid(_))));
    }

    #[test]
    fn bare_scheme_is_missing_not_invalid() {
        let inbound = Inbound::new(b"", "", Some("Bearer "));
        let result = crypto().authenticate(&inbound, OnFailure::Reject);
        assert_eq!(result.unwrap_err().message(), MISSING_MESSAGE);
    }

    #[test]
    fn pass_through_absorbs_everything() {
        let crypto = crypto();
        for inbound in [Inbound::default(), Inbound::new(b"", "", Some("Bearer forged"))] {
            let result = crypto.authenticate(&inbound, OnFailure::PassThroughAnonymous);
            assert!(matches!(result, Ok(None)));
        }
    }

    #[test]
    fn both_policies_accept_valid_token() {
        let crypto = crypto();
        let account = ID::<Account>::default();
        let token = crypto.issue("reader", "r@x.io", account).unwrap();
        let header = format!("Bearer {}", token);
        let inbound = Inbound::new(b"", "", Some(&header));
        for policy in [OnFailure::Reject, OnFailure::PassThroughAnonymous] {
            let identity = crypto.authenticate(&inbound, policy).unwrap().unwrap();
            assert_eq!(identity.account(), account.to_string());
        }
    }
}
