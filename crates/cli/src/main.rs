//! # Netid Resolver
//!
//! Resolves subscriber numbers (MSISDN) to the MCC/MNC of the network they
//! are currently attached to.

mod bootstrap;
mod di;

use clap::{Parser, Subcommand};
use futures::future::join_all;
use netid_application::services::ResolutionCache;
use netid_domain::CliOverrides;
use netid_jobs::{CacheMaintenanceJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "netid-resolver")]
#[command(version)]
#[command(about = "Resolve MSISDNs to their MCC/MNC network id")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Path to the SQLite database holding networks and settings
    #[arg(long)]
    database: Option<String>,

    /// Identity service URL prefix; the MSISDN is appended to it
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one or more MSISDNs concurrently
    Resolve {
        /// Report every failure instead of skipping subscribers that are backing off
        #[arg(long)]
        strict: bool,

        #[arg(required = true)]
        msisdns: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        base_url: cli.base_url,
        database_path: cli.database,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        base_url = %config.upstream.base_url,
        ttl_secs = config.cache.ttl_secs,
        database = %config.database.path,
        "Configuration loaded"
    );

    let pool = bootstrap::init_database(&config.database).await?;
    let repos = di::Repositories::new(pool, &config);
    let services = di::ResolverServices::new(&config, &repos).await;

    info!(networks = services.registry.len(), "Resolver ready");

    let shutdown = CancellationToken::new();
    JobRunner::new()
        .with_cache_maintenance(
            CacheMaintenanceJob::new(services.cache.clone())
                .with_interval(config.cache.maintenance_interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let outcome = match cli.command {
        Command::Resolve { strict, msisdns } => {
            run_resolve(&services.cache, &msisdns, strict).await
        }
    };

    shutdown.cancel();
    outcome
}

async fn run_resolve(
    cache: &ResolutionCache,
    msisdns: &[String],
    strict: bool,
) -> anyhow::Result<()> {
    if strict {
        let results = join_all(msisdns.iter().map(|m| cache.resolve(m))).await;

        let mut failed = 0usize;
        for (msisdn, result) in msisdns.iter().zip(results) {
            match result {
                Ok(network_id) => println!("{msisdn}\t{network_id}"),
                Err(e) => {
                    failed += 1;
                    println!("{msisdn}\terror: {e}");
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{} of {} lookups failed", failed, msisdns.len());
        }
    } else {
        let results = join_all(msisdns.iter().map(|m| cache.try_resolve(m))).await;

        for (msisdn, result) in msisdns.iter().zip(results) {
            match result {
                Some(network_id) => println!("{msisdn}\t{network_id}"),
                None => println!("{msisdn}\t-"),
            }
        }
    }

    Ok(())
}
