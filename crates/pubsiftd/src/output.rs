//! Console, CSV, and JSON rendering of the filtered report.
//!
//! Rendering is strictly downstream of the pipeline: it consumes
//! [`OutputRecord`]s and never feeds anything back. Multi-valued fields are
//! joined with `"; "` for the flat formats.

use console::style;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "⚠️ ";
/// Branch character for tree structure
pub static TREE_BRANCH: &str = "├─";
/// Leaf character for tree structure (end of branch)
pub static TREE_LEAF: &str = "└─";

/// Prints an informational status line.
pub fn reply_info(message: &str) { println!("{} {}", style(INFO_PREFIX).blue(), message); }

/// Prints a success status line.
pub fn reply_success(message: &str) { println!("{} {}", style(SUCCESS_PREFIX).green(), message); }

/// Prints a warning status line.
pub fn reply_warning(message: &str) {
  println!("{} {}", style(WARNING_PREFIX).yellow(), message);
}

/// Placeholder shown for absent identifiers and titles in the console view.
const ABSENT: &str = "(none)";

/// Renders the report as a styled tree, one block per article.
pub fn render_records(records: &[OutputRecord]) {
  for record in records {
    println!(
      "\n{} {}",
      style(record.id.as_deref().unwrap_or(ABSENT)).cyan().bold(),
      style(record.title.as_deref().unwrap_or(ABSENT)).bold(),
    );
    println!("{} Published: {}", TREE_BRANCH, record.publication_date);
    println!("{} Non-academic authors: {}", TREE_BRANCH, record.non_academic_authors.join("; "));
    println!("{} Company affiliations: {}", TREE_BRANCH, record.company_affiliations.join("; "));
    let emails =
      if record.emails.is_empty() { ABSENT.to_string() } else { record.emails.join("; ") };
    println!("{} Emails: {}", TREE_LEAF, emails);
  }
}

/// One flat CSV row; sequence fields are pre-joined.
#[derive(Serialize)]
struct CsvRow<'a> {
  /// PubMed identifier, empty when absent.
  pmid:                 &'a str,
  /// Article title, empty when absent.
  title:                &'a str,
  /// Best-effort publication date or `N/A`.
  publication_date:     &'a str,
  /// Deduplicated author names, `; `-joined.
  non_academic_authors: String,
  /// Deduplicated affiliation strings, `; `-joined.
  company_affiliations: String,
  /// Email-bearing affiliation strings, `; `-joined.
  emails:               String,
}

/// Writes the report as CSV with a header row.
pub fn write_csv(path: &Path, records: &[OutputRecord]) -> Result<()> {
  let mut writer = csv::Writer::from_path(path)?;
  for record in records {
    writer.serialize(CsvRow {
      pmid:                 record.id.as_deref().unwrap_or(""),
      title:                record.title.as_deref().unwrap_or(""),
      publication_date:     &record.publication_date,
      non_academic_authors: record.non_academic_authors.join("; "),
      company_affiliations: record.company_affiliations.join("; "),
      emails:               record.emails.join("; "),
    })?;
  }
  writer.flush()?;
  Ok(())
}

/// Prints the report as pretty JSON to stdout.
pub fn print_json(records: &[OutputRecord]) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(records)?);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_prefixes_use_the_shared_glyph_set() {
    assert_eq!(INFO_PREFIX, "ℹ ");
    assert_eq!(SUCCESS_PREFIX, "✓ ");
    assert_eq!(WARNING_PREFIX, "⚠️ ");
  }
}
