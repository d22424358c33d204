//! joinery-estimate - CLI tool to estimate cutlists and prices for furniture projects.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use joinery_core::{
    estimate_project, generate_report, load_project, load_settings, validate_project,
    ShopSettings,
};

/// Estimate cutlists, sheet usage and sale price for a furniture project.
#[derive(Parser, Debug)]
#[command(name = "joinery-estimate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input project JSON file path
    #[arg(short, long)]
    input: PathBuf,

    /// Shop settings JSON file path
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Output report file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't estimate
    #[arg(long)]
    validate: bool,

    /// Output the estimate as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    let project = load_project(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let settings = match &args.settings {
        Some(path) => {
            load_settings(path).with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => {
            warn!("No shop settings given, using default prices");
            ShopSettings::default()
        }
    };

    info!("Loaded {} module(s)", project.modules.len());

    // Validate
    let validation = validate_project(&project);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let estimate = estimate_project(&project, &settings);

    let output = if args.json {
        serde_json::to_string_pretty(&estimate)?
    } else {
        generate_report(&project, &estimate)
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}
