//! HTTP server command

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use todolist_server::{create_pool, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TODOLIST_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (default: sqlite://~/.todolist/todolist.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    let database_url = super::resolve_database_url(args.database_url)?;

    tracing::info!("Starting todolist server on {}", config.bind_addr);
    tracing::info!("Database: {}", database_url);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_map_to_config() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--timeout",
            "5",
            "--cors-permissive",
        ])
        .unwrap();

        let config = args.server_config();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.cors_permissive);
    }
}
