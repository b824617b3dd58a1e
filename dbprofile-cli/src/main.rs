//! # dbprofile
//!
//! Command-line interface for database profiles:
//! - Load `.env` (or an explicit env file)
//! - Resolve the connection block from `DB_*` / `MYSQL_*`
//! - Print the profiles as JSON, explain resolution, or check the database

mod report;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dbprofile_core::ProfileService;
use dbprofile_env::{Layered, MapEnv, ProcessEnv, load_dotenv, resolve_field};
use dbprofile_types::{ConnectionField, DeploymentMode, EnvSource};

#[derive(Parser)]
#[command(name = "dbprofile")]
#[command(author, version, about = "Database profiles for the migration tool", long_about = None)]
struct Cli {
    /// Read variables from this file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Deployment mode (development or production); defaults to APP_ENV / NODE_ENV
    #[arg(long, global = true)]
    mode: Option<DeploymentMode>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the profile for the selected mode as JSON
    Show {
        /// Print both development and production
        #[arg(long)]
        all: bool,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Show which variable supplied each connection field
    Env,
    /// Connect to the database once and ping it
    Check,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());

    // stdout carries command output only.
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Environment source for this run. Process variables win over the env file.
fn build_env(env_file: Option<&Path>) -> Result<Box<dyn EnvSource>> {
    match env_file {
        Some(path) => {
            let file = MapEnv::from_env_file(path)?;
            tracing::debug!(path = %path.display(), vars = file.len(), "using env file");
            Ok(Box::new(Layered::new(ProcessEnv, file)))
        }
        None => Ok(Box::new(ProcessEnv)),
    }
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables; report once the subscriber is installed
    let dotenv = cli.env_file.is_none().then(load_dotenv);

    init_tracing(cli.json_logs);
    match dotenv {
        Some(Ok(Some(path))) => tracing::debug!(path = %path.display(), "loaded .env"),
        Some(Err(e)) => tracing::warn!(error = %e, "failed to load .env"),
        _ => {}
    }

    let service = ProfileService::new(build_env(cli.env_file.as_deref())?);
    // Only commands that pick a single profile need the mode.
    let mode = || -> Result<DeploymentMode> {
        match cli.mode {
            Some(mode) => Ok(mode),
            None => Ok(service.active_mode()?),
        }
    };

    match cli.command {
        Commands::Show { all, compact } => {
            let json = if all {
                to_json(&service.assemble(), compact)?
            } else {
                to_json(&service.profile(mode()?), compact)?
            };
            println!("{}", json);
        }

        Commands::Env => {
            let mode = mode()?;
            let fields: Vec<_> = ConnectionField::ALL
                .into_iter()
                .map(|field| resolve_field(service.env(), field))
                .collect();
            print!("{}", report::render_resolution(mode, &fields));
        }

        Commands::Check => {
            let mode = mode()?;
            dbprofile_mysql::check_connection(mode, &service.profile(mode)).await?;
            println!("✓ {} database is reachable", mode);
        }
    }

    Ok(())
}
