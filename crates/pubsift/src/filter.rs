//! Per-article inclusion decisions and report-record assembly.
//!
//! This stage consumes extracted [`Article`]s and the
//! [`AffiliationClassifier`] to decide which articles make the report and to
//! flatten each qualifying article into an [`OutputRecord`]. It never fails:
//! absent fields propagate as absent, and an article that doesn't qualify
//! simply produces nothing.

use super::*;
use crate::{
  article::{Article, OutputRecord},
  classify::AffiliationClassifier,
};

/// Tests whether at least one affiliation of any author classifies as a
/// company.
///
/// This is the inclusion gate: an existential test over the article's
/// affiliations in document order, short-circuiting on the first company
/// match. Articles with zero authors or zero affiliations trivially fail it.
pub fn has_company_author(article: &Article, classifier: &AffiliationClassifier) -> bool {
  article
    .authors
    .iter()
    .flat_map(|author| author.affiliations.iter())
    .any(|affiliation| classifier.is_company(affiliation))
}

/// Builds the report record for one article, or `None` if it doesn't qualify.
///
/// For qualifying articles every author is re-scanned: each company-classified
/// affiliation records the author's name into `non_academic_authors` and the
/// affiliation text into `company_affiliations`. Both collections are
/// deduplicated in first-seen document order — an author with several
/// qualifying affiliations contributes their name once, and an affiliation
/// shared by several authors appears once. The remaining fields carry through
/// from the article verbatim.
pub fn build_record(article: &Article, classifier: &AffiliationClassifier) -> Option<OutputRecord> {
  if !has_company_author(article, classifier) {
    trace!("excluding article {:?}: no company-affiliated author", article.id);
    return None;
  }

  let mut non_academic_authors: Vec<String> = Vec::new();
  let mut company_affiliations: Vec<String> = Vec::new();
  for author in &article.authors {
    for affiliation in &author.affiliations {
      if classifier.is_company(affiliation) {
        if !non_academic_authors.contains(&author.name) {
          non_academic_authors.push(author.name.clone());
        }
        if !company_affiliations.contains(affiliation) {
          company_affiliations.push(affiliation.clone());
        }
      }
    }
  }

  Some(OutputRecord {
    id: article.id.clone(),
    title: article.title.clone(),
    publication_date: article.publication_date.clone(),
    non_academic_authors,
    company_affiliations,
    emails: article.emails.clone(),
  })
}

/// Filters a batch of articles down to report records.
///
/// Maps [`build_record`] over the slice, keeping qualifying articles in their
/// original order.
pub fn filter_articles(
  articles: &[Article],
  classifier: &AffiliationClassifier,
) -> Vec<OutputRecord> {
  let records: Vec<OutputRecord> =
    articles.iter().filter_map(|article| build_record(article, classifier)).collect();
  debug!("{} of {} articles have a company-affiliated author", records.len(), articles.len());
  records
}
