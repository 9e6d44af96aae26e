//! # Organisations API Main Entry Point
//!
//! This is the main entry point for the Organisations API service.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use organisations::{
    config::{AppConfig, ConfigLoader},
    db,
    migration::{Migrator, MigratorTrait},
    server::run_server,
    telemetry,
};

#[derive(Debug, Parser)]
#[command(name = "organisations", version, about = "Organisations and locations API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Manage the database schema
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum MigrateAction {
    /// Apply all pending migrations
    Up,
    /// Roll back the most recent migration
    Down,
    /// Print the status of every migration
    Status,
    /// Drop all tables and reapply every migration
    Fresh,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from layered env files and variables
    let config = ConfigLoader::new()
        .load()
        .context("loading configuration")?;

    telemetry::init_tracing(&config).context("initializing telemetry")?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "Effective configuration");
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Migrate { action } => migrate(&config, action).await,
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    let db = db::init_pool(&config)
        .await
        .context("initializing database connection pool")?;

    if config.run_migrations {
        db::run_migrations(&db).await?;
    }

    run_server(config, db).await
}

async fn migrate(config: &AppConfig, action: MigrateAction) -> Result<()> {
    let db = db::init_pool(config)
        .await
        .context("initializing database connection pool")?;

    match action {
        MigrateAction::Up => db::run_migrations(&db).await?,
        MigrateAction::Down => {
            Migrator::down(&db, Some(1))
                .await
                .context("rolling back last migration")?;
            tracing::info!("Rolled back last migration");
        }
        MigrateAction::Status => Migrator::status(&db)
            .await
            .context("reading migration status")?,
        MigrateAction::Fresh => {
            Migrator::fresh(&db)
                .await
                .context("recreating database schema")?;
            tracing::info!("Database schema recreated");
        }
    }

    Ok(())
}
