//! Registration and login, shared by the REST routes and the query resolvers.
//! Both end by asking [`Crypto`] for a fresh token.
use super::*;
use bks_auth::AuthResponse;
use bks_auth::Crypto;
use bks_auth::LoginRequest;
use bks_auth::RegisterRequest;
use bks_auth::UserInfo;
use bks_auth::password;
use bks_core::Unique;
use bks_library::Library;

pub async fn sign_up(
    library: &Library,
    crypto: &Crypto,
    req: &RegisterRequest,
) -> Result<AuthResponse, Fault> {
    req.validate().map_err(Fault::Rejected)?;
    let hashword = password::hash(&req.password).map_err(|e| Fault::Hashing(e.to_string()))?;
    let account = library.register(&req.username, &req.email, hashword).await?;
    let token = crypto.issue(account.username(), account.email(), account.id())?;
    Ok(AuthResponse {
        token,
        user: UserInfo::from(&account),
    })
}

pub async fn sign_in(
    library: &Library,
    crypto: &Crypto,
    req: &LoginRequest,
) -> Result<AuthResponse, Fault> {
    let (account, hashword) = library.lookup(&req.email).await.ok_or(Fault::NoUser)?;
    if !password::verify(&req.password, &hashword) {
        log::debug!("wrong password for {}", account.username());
        return Err(Fault::Incorrect);
    }
    let token = crypto.issue(account.username(), account.email(), account.id())?;
    Ok(AuthResponse {
        token,
        user: UserInfo::from(&account),
    })
}
