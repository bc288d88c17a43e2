// Main entry point - Dependency injection, record generation and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::session_store::SessionStore;
use crate::domain::record::GroceryRecord;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::file_repository::FileDataSource;
use crate::infrastructure::record_writer::write_record;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[derive(Parser)]
#[command(name = "grocery-dashboard")]
#[command(about = "Grocery data generator and visualization dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the fixed grocery record as JSON
    Generate {
        /// Output path (default: the configured JSON source)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Serve the dashboard over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = load_dashboard_config().context("Failed to load dashboard configuration")?;

    match cli.command {
        Commands::Generate { output } => {
            let path = output.unwrap_or(config.sources.json_path);
            write_record(&path, &GroceryRecord::fixed())
                .await
                .with_context(|| format!("Failed to write record to {}", path.display()))?;
        }
        Commands::Serve => {
            let source = Arc::new(FileDataSource::new(&config.sources));

            let state = Arc::new(AppState {
                dashboard_service: DashboardService::new(source),
                sessions: SessionStore::new(config.server.max_sessions),
            });

            let addr = config.server.bind_address();
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Starting grocery-dashboard service on {}", addr);

            axum::serve(listener, router(state)).await?;
        }
    }

    Ok(())
}
