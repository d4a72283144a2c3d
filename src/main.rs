//! actions-dash - GitHub Actions health dashboard
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;

use actions_dash::config::{DEFAULT_CACHE_TTL, DEFAULT_MAX_RUNS, DEFAULT_NAME_LENGTH};
use actions_dash::logging::init_logging;
use actions_dash::{
    build_dashboard, render_dashboard, DashConfig, FetchOptions, GhCli, OutputMode, Window,
};

/// GitHub Actions health dashboard
///
/// Shows recent run health, average elapsed time and billable time for the
/// workflows of an organization's or user's repositories. Requires an
/// authenticated `gh` CLI on PATH.
#[derive(Parser, Debug)]
#[command(name = "actions-dash", version, about)]
struct Cli {
    /// Organization or user login
    selector: String,

    /// One or more repository names from the provided org or user
    #[arg(short, long, value_delimiter = ',')]
    repos: Vec<String>,

    /// What period of time to cover, e.g. 30d or 12h
    #[arg(short, long, default_value = "30d")]
    last: Window,

    /// Number of recent runs the health summary is based on
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_RUNS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_runs: usize,

    /// Workflow names longer than this are truncated on cards
    #[arg(
        long,
        default_value_t = DEFAULT_NAME_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    name_length: usize,

    /// Cache TTL passed to `gh api --cache`
    #[arg(long, default_value = DEFAULT_CACHE_TTL)]
    cache: String,

    /// Print a plain list even when stdout is a terminal
    #[arg(long)]
    plain: bool,

    /// Increase diagnostic logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Decide between the card grid and the plain list.
fn output_mode(force_plain: bool) -> OutputMode {
    if force_plain {
        return OutputMode::Plain;
    }
    let is_terminal = std::io::stdout().is_terminal();
    let width = crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| usize::from(cols));
    OutputMode::detect(is_terminal, width)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let config = DashConfig::new(cli.max_runs, cli.name_length, &cli.cache)
        .context("Invalid arguments")?;

    let options = FetchOptions {
        selector: cli.selector,
        repositories: cli.repos,
        window: cli.last,
    };
    tracing::debug!(?options, ?config, "building dashboard");

    let api = GhCli::new(&config.cache_ttl);
    let dashboard = build_dashboard(&api, &options, chrono::Utc::now()).await?;

    print!(
        "{}",
        render_dashboard(&dashboard, &config, output_mode(cli.plain))
    );

    Ok(())
}
