//! Topcap main entry point
//!
//! Command-line interface for the Topcap top-K market value crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use topcap::config::load_config_with_hash;
use topcap::crawler::run_crawl;
use tracing_subscriber::EnvFilter;

/// Topcap: a top-K market value crawler
///
/// Topcap discovers company detail pages from a listing page, fetches and
/// parses them in parallel, keeps the K companies with the largest market
/// value, and persists that set to SQLite.
#[derive(Parser, Debug)]
#[command(name = "topcap")]
#[command(version = "1.0.0")]
#[command(about = "A top-K market value crawler", long_about = None)]
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

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with = "export_json")]
    dry_run: bool,

    /// Print the persisted result set as JSON and exit
    #[arg(long, conflicts_with = "dry_run")]
    export_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.export_json {
        handle_export_json(&config)?;
    } else {
        run_crawl(config, &config_hash)
            .await
            .context("crawl failed")?;
        tracing::info!("Crawl completed successfully");
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("topcap=info,warn"),
            1 => EnvFilter::new("topcap=debug,info"),
            2 => EnvFilter::new("topcap=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &topcap::config::Config) {
    println!("=== Topcap Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Top K: {}", config.crawler.top_k);
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);

    println!("\nSource:");
    println!("  Base URL: {}", config.source.base_url);
    println!("  Listing page: {}", config.source.listing_path);
    println!("  Detail link prefix: {}", config.source.detail_prefix);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Database: {}", config.output.database_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl {}{} and keep the {} most valuable companies",
        config.source.base_url, config.source.listing_path, config.crawler.top_k
    );
}

/// Handles the --export-json mode: prints the persisted result set
fn handle_export_json(config: &topcap::config::Config) -> anyhow::Result<()> {
    use std::path::Path;
    use topcap::output::export_companies_json;
    use topcap::storage::SqliteStorage;

    let storage = SqliteStorage::new(Path::new(&config.output.database_path))
        .context("failed to open database")?;

    let json = export_companies_json(&storage)?;
    println!("{}", json);

    Ok(())
}
