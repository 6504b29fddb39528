//! Petrify main entry point
//!
//! This is the command-line interface for the Petrify static-site mirror.

use clap::Parser;
use petrify::config::load_config;
use petrify::Coordinator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Petrify: mirror a live site into a relocatable static copy
///
/// Petrify crawls a content-managed website, rewrites every reference from
/// the source origin to the target origin, and writes the result as flat
/// files servable by any static host.
#[derive(Parser, Debug)]
#[command(name = "petrify")]
#[command(version)]
#[command(about = "Mirror a live site into a relocatable static copy", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the mirror plan without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_mirror(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("petrify=info,warn"),
            1 => EnvFilter::new("petrify=debug,info"),
            2 => EnvFilter::new("petrify=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the mirror plan
fn handle_dry_run(config: &petrify::Config) {
    println!("=== Petrify Dry Run ===\n");

    println!("Site:");
    println!("  Source: {}", config.site.source);
    println!("  Target: {}", config.site.target);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    println!(
        "\nPrivate mode: {}",
        if config.private.is_some() { "ON" } else { "OFF" }
    );
    println!(
        "Basic auth: {}",
        if config.basic_auth.is_some() {
            "ON"
        } else {
            "OFF"
        }
    );

    println!("\n✓ Configuration is valid");
    println!("✓ Would mirror from sitemap.xml, robots.txt, and favicon.ico");
}

/// Handles the main mirror operation
async fn handle_mirror(config: petrify::Config) -> anyhow::Result<()> {
    let mut coordinator = Coordinator::new(config)?;
    let output_root = coordinator.output_root().to_path_buf();

    match coordinator.run().await {
        Ok(()) => {
            tracing::info!("Mirror completed successfully");
            println!("Done. Contents have been downloaded into: {}", output_root.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Mirror failed: {}", e);
            Err(e.into())
        }
    }
}
