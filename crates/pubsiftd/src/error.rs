//! Error types for the pubsift CLI.

use thiserror::Error;

/// Error type alias used for the `pubsiftd` crate.
pub type Result<T> = core::result::Result<T, PubsiftdError>;

/// Errors that can occur while running the CLI.
#[derive(Error, Debug)]
pub enum PubsiftdError {
  /// An error bubbled up from the pubsift library (network, keyword config).
  #[error(transparent)]
  Pubsift(#[from] pubsift::error::PubsiftError),

  /// A file system operation failed, e.g. creating the output file.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Writing the CSV report failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// Serializing the JSON report failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
