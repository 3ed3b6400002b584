//! Error types for the pubsift library.
//!
//! Data-quality issues (ill-formed batch documents, missing metadata fields,
//! unrecognized affiliation text) deliberately never appear here — those
//! degrade to empty results or documented defaults inside the pipeline. The
//! variants below cover transport and contract faults only.
//!
//! # Examples
//!
//! ```no_run
//! use pubsift::{client::PubMedClient, error::PubsiftError};
//!
//! # async fn example() {
//! match PubMedClient::new().search("alzheimers", 10).await {
//!   Err(PubsiftError::Network(e)) => println!("network error: {e}"),
//!   Err(e) => println!("other error: {e}"),
//!   Ok(pmids) => println!("{} results", pmids.len()),
//! }
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`pubsift`](crate) crate.
pub type Result<T> = core::result::Result<T, PubsiftError>;

/// Errors that can occur when working with the pubsift library.
#[derive(Error, Debug)]
pub enum PubsiftError {
  /// A network request to the E-utilities API failed.
  ///
  /// This can occur when the network is unavailable, the NCBI servers are
  /// unreachable, or TLS negotiation fails. There is no retry logic; the
  /// caller decides whether to run the search again.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A file system operation failed.
  ///
  /// Currently only raised when reading a keyword configuration file.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The esearch JSON response couldn't be deserialized.
  #[error(transparent)]
  Serialize(#[from] serde_json::Error),

  /// A keyword configuration document wasn't valid TOML.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// An API returned an error response.
  ///
  /// The string parameter contains the message from the API for debugging.
  #[error("API error: {0}")]
  ApiError(String),

  /// A configuration value was rejected.
  ///
  /// Raised when a keyword set contains a fragment that doesn't compile into
  /// a valid pattern.
  #[error("{0}")]
  Config(String),
}
