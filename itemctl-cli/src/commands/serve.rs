//! HTTP server command
//!
//! Builds the pool, ensures the item table exists, then serves until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use itemctl_server::db::{create_pool_with_options, ensure_schema, pool::DEFAULT_MAX_CONNECTIONS};
use itemctl_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ITEMCTL_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://development.db")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "ITEMCTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Log every executed SQL statement
    #[arg(long, env = "ITEMCTL_ECHO_SQL")]
    pub echo_sql: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database_url = %args.database_url, "Opening database");

    let pool = create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    let created = ensure_schema(&pool)
        .await
        .context("Failed to create item table")?;
    tracing::info!(created, "Schema ready");

    // Blocks until shutdown
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
