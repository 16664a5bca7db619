//! `deal-analyzer`: runs the scenario engine over a JSON request file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deal_analyzer::lookup::DemoComps;
use deal_analyzer::{AnalysisConfig, AnalysisRequest, Analyzer, FmrTable};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "deal-analyzer")]
#[command(about = "Estimate ARV and rank investment scenarios for a property", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one property and print the result as JSON
    Analyze {
        /// Request file: { "property": {...}, "comps": [...] }
        #[arg(short, long)]
        input: PathBuf,

        /// Partial JSON overriding the default assumptions
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fair market rent table to use instead of the built-in one
        #[arg(long)]
        fmr: Option<PathBuf>,

        /// Ignore request comps and use generated demo comps
        #[arg(long)]
        demo_comps: bool,

        #[arg(long)]
        pretty: bool,
    },
    /// Print the default configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,deal_analyzer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Analyze {
            input,
            config,
            fmr,
            demo_comps,
            pretty,
        } => run_analyze(input, config, fmr, demo_comps, pretty),
        Command::Config => print_json(&AnalysisConfig::default(), true),
    }
}

fn run_analyze(
    input: PathBuf,
    config: Option<PathBuf>,
    fmr: Option<PathBuf>,
    demo_comps: bool,
    pretty: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => AnalysisConfig::from_json_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    let rents = match fmr {
        Some(path) => FmrTable::from_json_file(&path)
            .with_context(|| format!("loading FMR table {}", path.display()))?,
        None => FmrTable::atlanta_metro_2024(),
    };

    let raw = std::fs::read_to_string(&input).with_context(|| format!("reading {}", input.display()))?;
    let request: AnalysisRequest =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))?;
    let subject = request.subject().context("invalid property")?;

    let mut comps = if demo_comps {
        Vec::new()
    } else {
        request.normalized_comps(config.comps.max_comps)
    };
    if comps.is_empty() {
        warn!("no usable comps in request, using demo comps");
        comps = DemoComps::default().generate(subject.living_area());
    }

    info!(address = subject.address(), comps = comps.len(), "analyzing");
    let analyzer = Analyzer::new(config, Arc::new(rents));
    let result = analyzer.analyze(&subject, comps);

    print_json(&result, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
