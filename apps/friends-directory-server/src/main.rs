mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use friends_directory::FriendsDirectory;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::{AppConfig, CliOverrides};

/// Friends Directory Server - users and directed friendships over HTTP
#[derive(Parser)]
#[command(name = "friends-directory-server")]
#[command(about = "Friends Directory Server - users and directed friendships over HTTP")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use mock database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (FRIENDS__*, DATABASE_URL) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        mock: cli.mock,
        verbose: cli.verbose,
    });

    logging::init_logging(&config.logging)?;

    tracing::info!("Friends Directory Server starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.validate()?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn connect(config: &AppConfig) -> Result<DatabaseConnection> {
    let dsn = config
        .database
        .dsn
        .clone()
        .context("database.dsn is not set")?;

    let mut opts = ConnectOptions::new(dsn);
    opts.max_connections(config.database.max_connections)
        .sqlx_logging(false);

    // An unreachable store at startup is fatal.
    Database::connect(opts)
        .await
        .context("failed to connect to database")
}

async fn run_server(config: AppConfig) -> Result<()> {
    config.validate()?;
    let addr = config.bind_addr()?;

    let db = connect(&config).await?;
    FriendsDirectory::migrate(&db).await?;

    let module = FriendsDirectory::new(db.clone(), config.directory.clone());
    let router = module.router(config.request_timeout());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    db.close().await.context("failed to close database pool")?;
    tracing::info!("Friends Directory Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM; in-flight requests are then drained.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C handler failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler could not be installed");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("Shutdown signal received, draining connections");
}
