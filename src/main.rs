use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use allsport_data::assemble::build_dataset;
use allsport_data::bundle::write_bundle;
use allsport_data::catalog::select_leagues;
use allsport_data::config::{GeneratorConfig, split_list};
use allsport_data::http_cache::Fetcher;
use allsport_data::http_client::HttpTransport;
use allsport_data::logging::init_logging;

#[derive(Parser)]
#[command(name = "allsport-data")]
#[command(about = "Generate the AllSport front-end data bundle from public league APIs")]
#[command(version)]
struct Cli {
    /// Output bundle path (default: data/sports-data.js)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Comma separated league ids to build (default: whole catalog)
    #[arg(short, long)]
    league: Option<String>,

    /// Attempts per URL before the run is aborted
    #[arg(long)]
    retries: Option<u32>,

    /// Pause after each request in milliseconds; retry n waits n times this
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let cli = Cli::parse();
    init_logging(cli.quiet, cli.debug);

    let mut config = GeneratorConfig::from_env();
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(leagues) = cli.league.as_deref() {
        config.leagues = split_list(leagues);
    }
    if let Some(retries) = cli.retries {
        config.retries = retries.max(1);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.delay = Duration::from_millis(delay_ms);
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout = Duration::from_secs(timeout_secs.max(1));
    }

    let leagues = select_leagues(&config.leagues)?;
    let transport = HttpTransport::new(config.timeout, &config.user_agent)?;
    let mut fetcher = Fetcher::new(transport, config.retry_policy());

    let started = Instant::now();
    let dataset = build_dataset(&mut fetcher, &leagues, Utc::now())
        .context("data generation aborted")?;
    write_bundle(&dataset, &config.output)?;

    let teams: usize = dataset.leagues.iter().map(|l| l.teams.len()).sum();
    log::info!(
        "Wrote data bundle to {} ({} leagues, {} teams, {} players, {} stadiums, {} requests, {:.1}s)",
        config.output.display(),
        dataset.leagues.len(),
        teams,
        dataset.players.len(),
        dataset.stadiums.len(),
        fetcher.network_calls(),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
