//! Bookshelf Backend Binary
//!
//! REST routes and the query entry point on one actix-web server.
//! Configured from flags or BIND_ADDR, JWT_SECRET_KEY, WORKERS, LOG_DIR.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = bks_server::Config::load();
    bks_core::log(&config.logs)?;
    bks_server::run(config)
        .await
        .inspect_err(|e| log::error!("server stopped: {:#}", e))
}
