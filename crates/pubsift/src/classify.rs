//! Heuristic classification of affiliation strings as company vs. academic.
//!
//! The classifier is a pure, total function over strings: any input, including
//! the empty string, gets a deterministic yes/no answer and nothing ever
//! errors at classification time. The decision procedure is, in order:
//!
//! 1. Lowercase the text.
//! 2. **Academic override** — if any academic keyword matches as a whole
//!    word, the affiliation is not a company, unconditionally. This takes
//!    precedence even when company keywords appear in the same string
//!    ("Pfizer Inc, University Hospital" is not a company affiliation).
//! 3. Otherwise, any whole-word company keyword match means company.
//! 4. Otherwise, not a company.
//!
//! Whole-word matching matters: `co` must match "Acme Co" but never the
//! inside of "Coordinator". Matching is text-only — there is no organization
//! database behind this, and the result is a heuristic, not authoritative.
//!
//! # Examples
//!
//! ```
//! use pubsift::classify::AffiliationClassifier;
//!
//! let classifier = AffiliationClassifier::new();
//! assert!(classifier.is_company("Acme Pharma Inc, Cambridge, MA"));
//! assert!(!classifier.is_company("Department of Biology, MIT"));
//! assert!(!classifier.is_company("Pfizer Inc, Massachusetts General Hospital"));
//! ```
//!
//! The keyword tables can be replaced from a TOML document when the defaults
//! don't fit a corpus:
//!
//! ```
//! use pubsift::classify::AffiliationClassifier;
//!
//! let toml = r#"
//!   company = ["kk", "oy"]
//! "#;
//! let classifier = AffiliationClassifier::from_config_str(toml)?;
//! assert!(classifier.is_company("Suntory KK, Tokyo"));
//! # Ok::<(), pubsift::error::PubsiftError>(())
//! ```

use super::*;

/// Default academic keyword fragments. Any whole-word match classifies the
/// affiliation as not-company, overriding the company table.
const ACADEMIC_KEYWORDS: &[&str] = &[
  "university",
  "institute",
  "college",
  "hospital",
  "department",
  "centre",
  "center",
  "clinic",
  "residency",
  "medical school",
  "faculty",
];

/// Default company keyword fragments. Entries are regex fragments, not plain
/// words, so spelling variants can be folded into one entry.
const COMPANY_KEYWORDS: &[&str] = &[
  "inc",
  "ltd",
  "llc",
  "corp",
  "co",
  "company",
  "technologies",
  "solutions",
  "pharma",
  "industries",
  "biotech",
  "laboratories",
  "start[- ]?up",
  "sas",
  "gmbh",
  "pvt",
  "private limited",
];

lazy_static! {
  /// Compiled default academic table.
  static ref DEFAULT_ACADEMIC: Regex = compile_keywords(ACADEMIC_KEYWORDS.iter()).unwrap();
  /// Compiled default company table.
  static ref DEFAULT_COMPANY: Regex = compile_keywords(COMPANY_KEYWORDS.iter()).unwrap();
}

/// Replacement keyword tables, loadable from a TOML document.
///
/// Both fields are optional; a missing or empty category keeps the built-in
/// defaults for that category, so a config can adjust one table without
/// restating the other.
///
/// ```toml
/// academic = ["university", "academy"]
/// company  = ["inc", "ltd", "kk"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordConfig {
  /// Academic keyword fragments (whole-word matched, lowercase).
  #[serde(default)]
  pub academic: Vec<String>,
  /// Company keyword fragments (whole-word matched, lowercase).
  #[serde(default)]
  pub company:  Vec<String>,
}

/// Classifies free-text affiliation strings as company-affiliated or not.
///
/// Holds the two compiled keyword tables. Construction can fail (a custom
/// fragment may not compile); classification itself cannot.
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
  /// Whole-word academic matcher, checked first.
  academic: Regex,
  /// Whole-word company matcher, checked only when no academic keyword hit.
  company:  Regex,
}

impl Default for AffiliationClassifier {
  fn default() -> Self {
    Self { academic: DEFAULT_ACADEMIC.clone(), company: DEFAULT_COMPANY.clone() }
  }
}

impl AffiliationClassifier {
  /// Creates a classifier with the built-in keyword tables.
  pub fn new() -> Self { Self::default() }

  /// Creates a classifier from replacement keyword tables.
  ///
  /// Empty categories fall back to the built-in defaults.
  ///
  /// # Errors
  ///
  /// Returns [`PubsiftError::Config`] if a fragment doesn't compile as part
  /// of the whole-word alternation.
  pub fn from_config(config: KeywordConfig) -> Result<Self> {
    let academic = if config.academic.is_empty() {
      DEFAULT_ACADEMIC.clone()
    } else {
      compile_keywords(config.academic.iter())?
    };
    let company = if config.company.is_empty() {
      DEFAULT_COMPANY.clone()
    } else {
      compile_keywords(config.company.iter())?
    };
    Ok(Self { academic, company })
  }

  /// Creates a classifier from a TOML keyword document.
  ///
  /// # Errors
  ///
  /// Returns [`PubsiftError::TomlDe`] for invalid TOML and
  /// [`PubsiftError::Config`] for fragments that don't compile.
  pub fn from_config_str(toml_str: &str) -> Result<Self> {
    let config: KeywordConfig = toml::from_str(toml_str)?;
    Self::from_config(config)
  }

  /// Creates a classifier from a TOML keyword file.
  ///
  /// # Errors
  ///
  /// Returns [`PubsiftError::Path`] if the file can't be read, plus the
  /// errors of [`Self::from_config_str`].
  pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Self::from_config_str(&content)
  }

  /// Decides whether an affiliation string looks like a company.
  ///
  /// Academic keywords override company keywords; an empty string matches
  /// neither table and classifies as not-company.
  pub fn is_company(&self, affiliation: &str) -> bool {
    let text = affiliation.to_lowercase();
    if self.academic.is_match(&text) {
      trace!("affiliation {affiliation:?} -> academic override");
      return false;
    }
    let company = self.company.is_match(&text);
    trace!("affiliation {affiliation:?} -> {}", if company { "company" } else { "non-company" });
    company
  }
}

/// Joins keyword fragments into a single whole-word alternation.
///
/// Fragments are trusted regex fragments rather than escaped literals, so
/// table entries like `start[- ]?up` can cover spelling variants.
fn compile_keywords<S: AsRef<str>>(fragments: impl Iterator<Item = S>) -> Result<Regex> {
  let alternation = fragments.map(|f| f.as_ref().to_string()).collect::<Vec<_>>().join("|");
  let pattern = format!(r"\b(?:{alternation})\b");
  Regex::new(&pattern)
    .map_err(|e| PubsiftError::Config(format!("invalid keyword pattern {pattern:?}: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn academic_override_beats_company_keywords() {
    let classifier = AffiliationClassifier::new();
    assert!(!classifier.is_company("Pfizer Inc, Massachusetts General Hospital"));
    assert!(!classifier.is_company("Pfizer Inc., University Hospital Basel"));
  }

  #[test]
  fn whole_word_boundaries_are_respected() {
    let classifier = AffiliationClassifier::new();
    assert!(!classifier.is_company("Coordinator of Research"));
    assert!(classifier.is_company("Acme Co"));
    assert!(classifier.is_company("Acme Co., Boston"));
  }

  #[test]
  fn common_company_suffixes_match() {
    let classifier = AffiliationClassifier::new();
    assert!(classifier.is_company("Genentech Inc, South San Francisco"));
    assert!(classifier.is_company("CureVac GmbH, Tübingen"));
    assert!(classifier.is_company("Sun Pharma, Mumbai"));
    assert!(classifier.is_company("Nimbus Therapeutics Pvt, Bangalore"));
  }

  #[test]
  fn startup_spelling_variants_match() {
    let classifier = AffiliationClassifier::new();
    assert!(classifier.is_company("a biotech start-up in Berlin"));
    // "biotech" alone already matches, so exercise the fragment in isolation
    let custom = AffiliationClassifier::from_config_str(r#"company = ["start[- ]?up"]"#).unwrap();
    assert!(custom.is_company("a startup in Berlin"));
    assert!(custom.is_company("a start-up in Berlin"));
    assert!(custom.is_company("a start up in Berlin"));
    assert!(!custom.is_company("upstart ventures"));
  }

  #[test]
  fn empty_and_unmatched_strings_are_not_company() {
    let classifier = AffiliationClassifier::new();
    assert!(!classifier.is_company(""));
    assert!(!classifier.is_company("Somewhere over the rainbow"));
  }

  #[test]
  fn academic_keywords_alone_are_not_company() {
    let classifier = AffiliationClassifier::new();
    assert!(!classifier.is_company("Department of Chemistry, University of Oxford"));
    assert!(!classifier.is_company("Mayo Clinic, Rochester, MN"));
  }

  #[test]
  fn matching_is_case_insensitive() {
    let classifier = AffiliationClassifier::new();
    assert!(classifier.is_company("ACME PHARMA INC"));
    assert!(!classifier.is_company("HARVARD MEDICAL SCHOOL"));
  }

  #[test]
  fn custom_tables_replace_only_their_category() {
    let classifier = AffiliationClassifier::from_config_str(r#"company = ["kk"]"#).unwrap();
    assert!(classifier.is_company("Suntory KK, Tokyo"));
    // the default company table is replaced...
    assert!(!classifier.is_company("Acme Pharma Inc"));
    // ...but the academic override still uses the defaults
    assert!(!classifier.is_company("KK University Hospital"));
  }

  #[test]
  fn invalid_fragment_is_rejected_at_construction() {
    let result = AffiliationClassifier::from_config_str(r#"company = ["("]"#);
    assert!(matches!(result, Err(PubsiftError::Config(_))));
  }

  #[test]
  fn invalid_toml_is_rejected() {
    let result = AffiliationClassifier::from_config_str("company = not-a-list");
    assert!(matches!(result, Err(PubsiftError::TomlDe(_))));
  }
}
