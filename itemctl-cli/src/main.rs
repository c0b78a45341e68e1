//! itemctl CLI - runs the item CRUD HTTP server
//!
//! Configuration comes from flags, then environment variables (a `.env`
//! file in the working directory is loaded first), then built-in defaults.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "itemctl",
    author,
    version,
    about = "HTTP CRUD service for items backed by SQLite"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            tracing_setup::init(&TracingConfig {
                debug: cli.debug,
                echo_sql: args.echo_sql,
            })?;
            commands::run_serve(args).await?
        }
    }

    Ok(())
}
