//! Bookshelf backend.
//!
//! Serves two pipelines over one signing key:
//!
//! - [`rest`] — registration, login, and `/api` routes behind the required-auth guard
//! - [`query`] — the query entry point, whose context tolerates anonymous callers
//!
//! Startup settings live in [`Config`].

#[cfg(test)]
macro_rules! app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    bks_auth::Crypto::new(b"test-secret").unwrap(),
                ))
                .app_data(actix_web::web::Data::new(bks_library::Library::new()))
                .configure(crate::configure),
        )
        .await
    };
}

mod accounts;
mod config;
mod fault;
pub mod query;
pub mod rest;

pub use config::*;
pub use fault::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::middleware::from_fn;
use actix_web::web;
use bks_library::Library;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Routes shared by the live server and tests.
/// Expects `web::Data<Crypto>` and `web::Data<Library>` as app data.
#[rustfmt::skip]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/graphql", web::post().to(query::execute))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(rest::register))
                .route("/login", web::post().to(rest::login)),
        )
        .service(
            web::scope("/api")
                .wrap(from_fn(bks_auth::guard))
                .route("/me", web::get().to(rest::me))
                .route("/books", web::post().to(rest::save_book))
                .route("/books/{book_id}", web::delete().to(rest::remove_book)),
        );
}

/// Builds the signing key from config, refusing to start without one.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let crypto = web::Data::new(bks_auth::Crypto::new(config.secret.as_bytes())?);
    let library = web::Data::new(Library::new());
    log::info!("starting bookshelf server on {}", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(library.clone())
            .configure(configure)
    })
    .workers(config.workers)
    .bind(&config.bind)?
    .run()
    .await?;
    Ok(())
}
