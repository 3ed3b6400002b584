//! Command line interface for the pubsift reporting tool.
//!
//! This crate provides the `pubsift` binary on top of the `pubsift` library.
//! A run searches PubMed for a query, fetches the matching article metadata,
//! filters it down to articles with at least one company-affiliated author,
//! and renders the report to the console, a CSV file, or JSON.
//!
//! # Usage
//!
//! ```bash
//! # Print a styled report to the console
//! pubsift search "cancer immunotherapy"
//!
//! # Cap the result count and write CSV
//! pubsift search "crispr delivery" --max-results 50 --output report.csv
//!
//! # Emit JSON for downstream tooling
//! pubsift search "alzheimers" --json
//!
//! # Swap in custom classifier keyword tables
//! pubsift search "vaccines" --keywords keywords.toml
//! ```
//!
//! Verbosity is controlled with repeated `-v` flags; `RUST_LOG` overrides the
//! derived filter when set.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use pubsift::{
  article::OutputRecord, classify::AffiliationClassifier, client::PubMedClient,
  extract::extract_articles, filter::filter_articles,
};
use serde::Serialize;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod output;

use crate::{commands::*, error::*, output::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Find PubMed articles with company-affiliated authors")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

/// Entry point for the pubsift CLI application
///
/// # Errors
///
/// Returns [`PubsiftdError`] for network failures, unreadable keyword
/// configuration, and report-writing failures. Data-quality issues (zero
/// matches, unparseable metadata) end the run gracefully instead.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match cli.command {
    Commands::Search(search_options) => search(search_options).await,
  }
}
