use super::*;
use bks_auth::Auth;
use bks_auth::Crypto;
use bks_auth::LoginRequest;
use bks_auth::RegisterRequest;
use bks_library::Book;
use bks_library::Library;
use actix_web::HttpResponse;
use actix_web::web;

pub async fn register(
    library: web::Data<Library>,
    crypto: web::Data<Crypto>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, Fault> {
    accounts::sign_up(&library, &crypto, &req)
        .await
        .map(|auth| HttpResponse::Ok().json(auth))
}

pub async fn login(
    library: web::Data<Library>,
    crypto: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, Fault> {
    accounts::sign_in(&library, &crypto, &req)
        .await
        .map(|auth| HttpResponse::Ok().json(auth))
}

pub async fn me(auth: Auth, library: web::Data<Library>) -> Result<HttpResponse, Fault> {
    let profile = library.profile(auth.identity().account()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub async fn save_book(
    auth: Auth,
    library: web::Data<Library>,
    book: web::Json<Book>,
) -> Result<HttpResponse, Fault> {
    let profile = library
        .save(auth.identity().account(), book.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub async fn remove_book(
    auth: Auth,
    library: web::Data<Library>,
    path: web::Path<String>,
) -> Result<HttpResponse, Fault> {
    let profile = library
        .remove(auth.identity().account(), &path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}
