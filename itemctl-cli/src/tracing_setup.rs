//! Tracing setup for itemctl
//!
//! Usage:
//!   itemctl --debug serve             # Debug logging to console
//!   itemctl serve --echo-sql          # Log every SQL statement
//!   RUST_LOG=itemctl_server=debug ... # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to debug level when RUST_LOG is unset
    pub debug: bool,
    /// Emit executed SQL statements (sqlx logs them at debug)
    pub echo_sql: bool,
}

impl TracingConfig {
    /// Filter directives used when RUST_LOG is not set.
    pub fn default_directives(&self) -> String {
        let mut directives = String::from(if self.debug { "debug" } else { "info" });
        if self.echo_sql {
            directives.push_str(",sqlx::query=debug");
        }
        directives
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
