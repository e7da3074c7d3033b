use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use revsim::config::{ForecastFile, ForecastOverrides};
use revsim::data::sample_claims;
use revsim::report::{render_probabilities, render_stats, render_summary};
use revsim::{HostEvent, SimulationHost, init_logging};
use revsim_core::ClaimStats;

#[derive(Parser, Debug)]
#[command(name = "revsim")]
#[command(about = "Monte Carlo revenue forecast for billing claims")]
struct Args {
    /// Forecast file (YAML); uses the built-in sample claims when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of simulated trials
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Seed for reproducible results
    #[arg(short, long)]
    seed: Option<u64>,

    /// Payment probability for Approved claims, in percent
    #[arg(long, value_parser = parse_percent)]
    approved: Option<f64>,

    /// Payment probability for Pending claims, in percent
    #[arg(long, value_parser = parse_percent)]
    pending: Option<f64>,

    /// Payment probability for Denied claims, in percent
    #[arg(long, value_parser = parse_percent)]
    denied: Option<f64>,

    /// Also print totals by payment status
    #[arg(long)]
    stats: bool,

    /// Write the effective forecast to this YAML file and exit
    #[arg(long)]
    write_forecast: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Give up waiting for the simulation after this many seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not between 0 and 100"))
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level, args.log_file.as_deref())?;

    let forecast = match &args.input {
        Some(path) => ForecastFile::load(path)?,
        None => ForecastFile {
            claims: sample_claims(),
            ..Default::default()
        },
    };

    let overrides = ForecastOverrides {
        iterations: args.iterations,
        seed: args.seed,
        approved_percent: args.approved,
        pending_percent: args.pending,
        denied_percent: args.denied,
    };
    let request = forecast.into_request(&overrides);

    if let Some(path) = &args.write_forecast {
        let effective = ForecastFile {
            iterations: Some(request.iterations),
            seed: request.seed,
            probabilities: Some(request.probabilities),
            claims: request.claims,
        };
        effective.save(path)?;
        println!("Wrote forecast to {}", path.display());
        return Ok(());
    }

    if args.stats {
        println!("{}", render_stats(&ClaimStats::from_claims(&request.claims)));
    }
    println!("{}", render_probabilities(&request.probabilities));

    let mut host = SimulationHost::new();
    let id = host.submit(request)?;

    match host.wait_for(id, Duration::from_secs(args.timeout_secs)) {
        Some(HostEvent::Completed { summary, .. }) => print!("{}", render_summary(&summary)),
        Some(HostEvent::Failed { error, .. }) => return Err(eyre!(error)),
        Some(HostEvent::Discarded { .. }) => bail!("simulation was superseded"),
        None => bail!("simulation did not finish within {}s", args.timeout_secs),
    }

    tracing::info!("Forecast complete");
    host.dispose();
    Ok(())
}
