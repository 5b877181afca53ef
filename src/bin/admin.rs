//! CLI administration tool for clifton.
//!
//! Inspects the catalogue without going through the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Print the APS document for a programme
//! cargo run --bin admin -- aps b006q2x0
//!
//! # Run the status probe
//! cargo run --bin admin -- status
//!
//! # Check database connection / apply the local schema
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`clifton::config`].

use clifton::config;
use clifton::server::{build_state, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;

/// CLI tool for managing clifton.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Print the APS document for a programme
    Aps {
        /// Programme PID (e.g. b006q2x0)
        pid: String,

        /// Print on one line instead of pretty-printing
        #[arg(short, long)]
        compact: bool,
    },

    /// Run the status probe
    Status,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply the catalogue schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config)?;

    match cli.command {
        Commands::Aps { pid, compact } => {
            let state = build_state(&config, pool)?;
            let programme = state
                .programmes_service
                .find_by_pid_full(&pid)
                .await
                .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;
            let document = state
                .mapper
                .get_aps_object(&programme.into())
                .map_err(|e| anyhow::anyhow!("Mapping failed: {}", e))?;

            let json = if compact {
                serde_json::to_string(&document)?
            } else {
                serde_json::to_string_pretty(&document)?
            };
            println!("{json}");
        }
        Commands::Status => {
            let state = build_state(&config, pool)?;
            let report = state.status_service.report().await;

            println!("{}", "Status".bright_blue().bold());
            println!();
            println!(
                "  Checked at:    {}",
                report.checked_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!(
                "  Connectivity:  {}",
                if report.db_connectivity {
                    "CONNECTED".green()
                } else {
                    "NOT CONNECTED".red()
                }
            );
            println!(
                "  Error check:   {}",
                if report.has_db_issues {
                    "ERROR".red()
                } else {
                    "OK".green()
                }
            );
            println!();
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking database connection... ");

            match sqlx::query("SELECT 1").execute(pool).await {
                Ok(_) => {
                    println!("{}", "OK".green().bold());

                    let version: String = sqlx::query_scalar("SELECT version()")
                        .fetch_one(pool)
                        .await?;
                    println!("  {}", version.bright_black());
                }
                Err(e) => {
                    println!("{}", "FAILED".red().bold());
                    return Err(e).context("Database connection failed");
                }
            }
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
