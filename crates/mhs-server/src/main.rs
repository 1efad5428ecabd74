//! Mergington High School activities API server.
//!
//! Startup sequence: parse CLI flags, initialize tracing, load layered
//! config, open the activities database (seeding the canonical catalog if
//! empty), bind the HTTP listener, then hand off to the accept loop.

use anyhow::Context;
use clap::Parser;

use mhs_config::MhsConfig;
use mhs_db::service::ActivityService;

mod cli;
mod handlers;
mod respond;
mod routes;
mod server;
mod statics;


#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("mhs error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => MhsConfig::load_from(path)?,
        None => MhsConfig::load_with_dotenv()?,
    };
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(db) = cli.db {
        config.database.path = db;
    }
    if let Some(static_dir) = cli.static_dir {
        config.server.static_dir = static_dir;
    }

    let service = ActivityService::open_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database '{}'", config.database.path))?;
    service
        .seed_activities()
        .await
        .context("failed to seed activity catalog")?;

    let server = tiny_http::Server::http(&config.server.bind)
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {e}", config.server.bind))?;
    tracing::info!(
        bind = %config.server.bind,
        db = %config.database.path,
        "activities API listening"
    );

    let state = server::AppState {
        service,
        static_dir: config.server.static_dir,
    };

    // tiny_http is blocking; run the accept loop on a blocking thread and
    // re-enter the runtime per request for the async database calls.
    let handle = tokio::runtime::Handle::current();
    tokio::task::spawn_blocking(move || server::serve_blocking(&server, &handle, &state))
        .await
        .context("server accept loop panicked")?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MHS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
