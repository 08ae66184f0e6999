use super::*;
use bks_auth::Identity;

pub async fn resolve(
    operation: Operation,
    context: &Context,
    library: &Library,
    crypto: &Crypto,
) -> Result<serde_json::Value, Fault> {
    match operation {
        Operation::Me => json(library.profile(caller(context)?.account()).await?),
        Operation::Login(req) => json(accounts::sign_in(library, crypto, &req).await?),
        Operation::AddUser(req) => json(accounts::sign_up(library, crypto, &req).await?),
        Operation::SaveBook { book_data } => {
            let account = caller(context)?.account();
            json(library.save(account, book_data).await?)
        }
        Operation::RemoveBook { book_id } => {
            let account = caller(context)?.account();
            json(library.remove(account, &book_id).await?)
        }
    }
}

/// Privileged resolvers need a verified caller.
fn caller(context: &Context) -> Result<&Identity, Fault> {
    context.user().ok_or(Fault::Unauthenticated)
}

fn json<T: Serialize>(value: T) -> Result<serde_json::Value, Fault> {
    serde_json::to_value(value).map_err(Fault::from)
}
