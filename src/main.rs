//! deadlink-crawler main entry point
//!
//! This is the command-line interface for the dead link crawler.

use anyhow::Context;
use clap::Parser;
use deadlink_crawler::config::{load_config, validate, Config};
use deadlink_crawler::output::{print_statistics, DeadLinkReporter};
use deadlink_crawler::Crawler;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// deadlink-crawler: find broken internal links on a website
///
/// Starting from the home page, every page reachable through anchor links on
/// the same site is fetched once. Links answering 404 are written, together
/// with the page they were found on, to the dead link report.
#[derive(Parser, Debug)]
#[command(name = "deadlink-crawler")]
#[command(version)]
#[command(about = "Recursively crawls a site and reports dead links with referring pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Site origin to crawl (e.g. https://example.org/)
    #[arg(long, value_name = "URL")]
    domain: Option<String>,

    /// Page to start from (defaults to <domain>index.html)
    #[arg(long, value_name = "URL")]
    home: Option<String>,

    /// Where to write the dead link report
    #[arg(long, value_name = "PATH")]
    report: Option<String>,

    /// Where to mirror log output
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;

    let log_file = open_log_file(Path::new(&config.output.log_path))?;
    setup_logging(cli.verbose, cli.quiet, log_file);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Loads the config file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(domain) = &cli.domain {
        config.site.domain = domain.clone();
    }
    if let Some(home) = &cli.home {
        config.site.home_url = Some(home.clone());
    }
    if let Some(report) = &cli.report {
        config.output.report_path = report.clone();
    }
    if let Some(log_file) = &cli.log_file {
        config.output.log_path = log_file.clone();
    }

    validate(&config).context("Invalid configuration")?;

    Ok(config)
}

/// Opens (or creates) the log file in append mode
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Sets up the tracing subscriber: console output mirrored into the log file
fn setup_logging(verbose: u8, quiet: bool, log_file: File) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("deadlink_crawler=info,warn"),
            1 => EnvFilter::new("deadlink_crawler=debug,info"),
            2 => EnvFilter::new("deadlink_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== deadlink-crawler Dry Run ===\n");

    println!("Site:");
    println!("  Domain: {}", config.site.domain);
    println!("  Home URL: {}", config.home_url());
    if config.site.excluded_subpath.is_empty() {
        println!("  Excluded subtree: (none)");
    } else {
        println!(
            "  Excluded subtree: {}{}",
            config.site.domain, config.site.excluded_subpath
        );
    }
    println!("  Placeholder hosts ({}):", config.site.placeholder_hosts.len());
    for host in &config.site.placeholder_hosts {
        println!("    - {}", host);
    }

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);
    println!("  Max redirects: {}", config.http.max_redirects);

    println!("\nOutput:");
    println!("  Report: {}", config.output.report_path);
    println!("  Log: {}", config.output.log_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    let mut crawler = Crawler::from_config(config).context("Failed to build HTTP client")?;

    let stats = crawler.run().await.clone();
    println!();
    print_statistics(&stats);
    println!();

    if crawler.reporter().dead_links().is_empty() {
        println!("No dead links found");
    } else {
        println!(
            "Dead links written to: {}",
            crawler.reporter().path().display()
        );
    }

    Ok(())
}
