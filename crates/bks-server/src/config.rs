use std::path::PathBuf;

/// Process configuration, read once at startup from flags or environment.
#[derive(Clone, clap::Parser)]
#[command(name = "backend", about = "Bookshelf API server")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3001")]
    pub bind: String,
    /// Token signing secret. Must be non-empty.
    #[arg(long, env = "JWT_SECRET_KEY", hide_env_values = true)]
    pub secret: String,
    /// HTTP worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Directory for timestamped log files.
    #[arg(long, env = "LOG_DIR", default_value = "logs")]
    pub logs: PathBuf,
}

impl Config {
    /// Parses flags and environment, exiting with usage on error.
    pub fn load() -> Self {
        <Self as clap::Parser>::parse()
    }
}
