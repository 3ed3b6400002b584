//! Core article metadata types for the filtering pipeline.
//!
//! These types are produced by [`crate::extract`] and consumed by
//! [`crate::filter`]. They are plain serde-derived records: constructed once
//! during extraction, never mutated afterward, and discarded after filtering.
//!
//! The shapes mirror what PubMed actually supplies rather than what a clean
//! bibliographic model would want. Identifiers and titles can be absent,
//! author names can be empty, and the email list is a text heuristic, not a
//! validated contact list.

use super::*;

/// A single author of an article, as extracted from one `<Author>` node.
///
/// # Examples
///
/// ```
/// use pubsift::article::Author;
///
/// let author = Author {
///   name:         "Jane Doe".to_string(),
///   affiliations: vec!["Acme Pharma Inc, Cambridge, MA".to_string()],
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
  /// Full name, joined from the source's fore and last name fields. Empty
  /// when both fields are missing — that is valid data, not an error.
  pub name:         String,
  /// Free-text affiliation strings for this author, in document order. May be
  /// empty.
  pub affiliations: Vec<String>,
}

/// One article from an efetch batch document.
///
/// Every field is best-effort: a malformed or sparse source node produces an
/// article with absent/defaulted fields rather than failing the batch. An
/// article with zero parseable authors is valid (it will simply never pass
/// the company-affiliation filter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
  /// PubMed identifier, or `None` if the source node carried no `PMID`.
  pub id:               Option<String>,
  /// Article title, or `None` if missing.
  pub title:            Option<String>,
  /// Authors in document order.
  pub authors:          Vec<Author>,
  /// Best-effort publication date: `YYYY-MM-DD` with missing components
  /// dropped from the tail (`"2021"`, `"2021-05"`), or the sentinel `"N/A"`
  /// when the source has no date node at all.
  pub publication_date: String,
  /// Affiliation strings anywhere under the article that contain an `@`.
  ///
  /// This is a heuristic carried over from the source data's conventions:
  /// PubMed embeds contact addresses in affiliation text, so "contains an
  /// at-sign" is used as-is without validating that the text is an email.
  pub emails:           Vec<String>,
}

/// The flat report row emitted for an article that passed the
/// company-affiliation filter.
///
/// One record per qualifying article. The two computed collections are
/// deduplicated in first-seen document order so that repeated runs over the
/// same batch produce identical reports. Any renderer (console table, CSV,
/// JSON) can consume the six fields unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
  /// PubMed identifier carried through from the article.
  pub id:                   Option<String>,
  /// Title carried through from the article.
  pub title:                Option<String>,
  /// Publication date carried through from the article.
  pub publication_date:     String,
  /// Names of authors with at least one company-classified affiliation,
  /// deduplicated, first-seen order.
  pub non_academic_authors: Vec<String>,
  /// The company-classified affiliation strings themselves, deduplicated,
  /// first-seen order.
  pub company_affiliations: Vec<String>,
  /// Email-bearing affiliation strings carried through verbatim from the
  /// article, independent of which authors were flagged.
  pub emails:               Vec<String>,
}
