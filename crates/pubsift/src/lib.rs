//! PubMed search and company-affiliation filtering library.
//!
//! `pubsift` finds articles in PubMed that have at least one author affiliated
//! with a company rather than an academic institution. It provides:
//!
//! - A client for the NCBI E-utilities API (search and metadata fetch)
//! - A streaming extractor that turns raw efetch XML into article records
//! - A keyword-driven heuristic classifier for affiliation strings
//! - A filter that reduces extracted articles to a flat, renderable report
//!
//! # Pipeline
//!
//! The stages compose in a straight line with no feedback:
//!
//! ```text
//! query ──> client::search ──> PMIDs ──> client::fetch ──> batch XML
//!       ──> extract::extract_articles ──> Vec<Article>
//!       ──> filter::filter_articles (uses classify) ──> Vec<OutputRecord>
//! ```
//!
//! Extraction, classification, and filtering are pure, synchronous functions
//! over their inputs. Only the client performs I/O, and it runs strictly
//! before the rest of the pipeline.
//!
//! # Examples
//!
//! ```no_run
//! use pubsift::{
//!   classify::AffiliationClassifier, client::PubMedClient, extract::extract_articles,
//!   filter::filter_articles, prelude::*,
//! };
//!
//! # async fn example() -> Result<()> {
//! let client = PubMedClient::new();
//! let pmids = client.search("cancer immunotherapy", 50).await?;
//! let batch = client.fetch(&pmids).await?;
//!
//! let articles = extract_articles(&batch);
//! let records = filter_articles(&articles, &AffiliationClassifier::new());
//! for record in &records {
//!   println!("{:?}: {:?}", record.id, record.company_affiliations);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Degrade-to-empty policy
//!
//! Data-shape problems never raise: a structurally invalid batch document
//! yields an empty article list, missing fields resolve to documented
//! defaults, and an affiliation that matches no keyword set classifies as
//! not-company. Only transport and contract faults surface as
//! [`error::PubsiftError`].

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

pub mod article;
pub mod classify;
pub mod client;
pub mod error;
pub mod extract;
pub mod filter;

use crate::error::*;

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use pubsift::prelude::*;
/// ```
pub mod prelude {
  pub use crate::error::{PubsiftError, Result};
}
