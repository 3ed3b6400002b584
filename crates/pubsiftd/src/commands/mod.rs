use super::*;

pub mod search;

pub use search::{search, SearchOptions};

/// Available commands for the CLI
#[derive(Subcommand)]
pub enum Commands {
  /// Search PubMed and report articles with company-affiliated authors
  Search(SearchOptions),
}
