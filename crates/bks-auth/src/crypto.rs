use super::*;
use bks_core::ID;

/// Signs and verifies access tokens with the process-wide secret.
/// Built once at startup and shared read-only by every request.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

impl Crypto {
    /// Refuses an empty secret: tokens signed with it would be forgeable by anyone.
    pub fn new(secret: &[u8]) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::Signing("signing secret is empty".to_string()));
        }
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.leeway = 0;
        Ok(Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
        })
    }
    /// Mints a token for an identity the caller has already verified.
    pub fn issue(
        &self,
        username: &str,
        email: &str,
        account: ID<Account>,
    ) -> Result<String, AuthError> {
        self.encode(&Claims::new(
            username.to_string(),
            email.to_string(),
            account,
        ))
    }
    /// Checks signature and expiry, then projects the payload.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        self.decode(token).map(Identity::from)
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
    /// The library accepts `exp == now`; a token is already dead at its horizon.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthError::from)?;
        if claims.expired(bks_core::epoch()) {
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }
}
