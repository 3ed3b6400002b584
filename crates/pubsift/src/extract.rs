//! Streaming extraction of article records from efetch batch documents.
//!
//! PubMed's efetch endpoint returns one XML document per batch of PMIDs,
//! with each article under a `<PubmedArticle>` node. This module walks that
//! document with a streaming event reader and produces one [`Article`] per
//! node, applying the degrade-to-empty policy throughout:
//!
//! - a missing field at any level resolves to a documented default (absent
//!   id/title, empty author name, `"N/A"` date) instead of failing the batch;
//! - a structurally invalid document yields an empty article list instead of
//!   a propagated parse fault.
//!
//! Extraction is purely structural — no classification logic lives here.

use quick_xml::{events::Event, Reader};

use super::*;
use crate::article::{Article, Author};

/// Sentinel used when an article carries no date node at all.
const NO_DATE: &str = "N/A";

/// In-flight state for the `<PubmedArticle>` currently being parsed.
#[derive(Default)]
struct ArticleState {
  /// First `PMID` text seen under the article.
  id:     Option<String>,
  /// First `ArticleTitle` text seen under the article.
  title:  Option<String>,
  /// Completed authors, in document order.
  authors: Vec<Author>,
  /// Date components, present once the first `PubDate` node opens.
  date:   Option<DateParts>,
  /// Email-bearing affiliation strings, article-wide.
  emails: Vec<String>,
}

/// Raw Year/Month/Day text from the first `PubDate` node.
///
/// Components missing in the source stay empty and are dropped when the date
/// string is assembled, so a year-only date renders as `"2021"` and
/// year+month as `"2021-05"`.
#[derive(Default)]
struct DateParts {
  /// `Year` text, or empty.
  year:  String,
  /// `Month` text, or empty. PubMed uses both numeric and named months; the
  /// text is carried verbatim either way.
  month: String,
  /// `Day` text, or empty.
  day:   String,
}

impl DateParts {
  /// Joins the components with `-` and trims separators left by missing
  /// parts.
  fn assemble(&self) -> String {
    format!("{}-{}-{}", self.year, self.month, self.day).trim_matches('-').to_string()
  }
}

/// In-flight state for the `<Author>` currently being parsed.
#[derive(Default)]
struct AuthorState {
  /// `ForeName` text, or empty.
  fore:         String,
  /// `LastName` text, or empty.
  last:         String,
  /// `AffiliationInfo/Affiliation` texts under this author, document order.
  affiliations: Vec<String>,
}

impl AuthorState {
  /// Builds the final [`Author`], joining the name parts and trimming the
  /// whitespace a missing part leaves behind. Both parts missing yields an
  /// empty name, which is valid.
  fn finish(self) -> Author {
    let name = format!("{} {}", self.fore, self.last).trim().to_string();
    Author { name, affiliations: self.affiliations }
  }
}

/// Parses an efetch batch document into zero or more article records.
///
/// Produces one [`Article`] per `<PubmedArticle>` node, each with best-effort
/// field extraction: absent fields never fail the batch. A document that is
/// not well-formed XML yields an empty vector (logged at `warn`), and a
/// well-formed document containing zero article nodes yields an empty vector
/// silently — the two cases deliberately collapse to the same signal.
///
/// The extractor is a pure function of its input; calling it twice on the
/// same document produces identical results.
///
/// # Examples
///
/// ```
/// use pubsift::extract::extract_articles;
///
/// let batch = r#"
///   <PubmedArticleSet>
///     <PubmedArticle>
///       <MedlineCitation><PMID>12345</PMID></MedlineCitation>
///     </PubmedArticle>
///   </PubmedArticleSet>
/// "#;
/// let articles = extract_articles(batch);
/// assert_eq!(articles.len(), 1);
/// assert_eq!(articles[0].id.as_deref(), Some("12345"));
/// ```
pub fn extract_articles(xml: &str) -> Vec<Article> {
  let mut reader = Reader::from_str(xml);

  let mut articles = Vec::new();
  let mut path: Vec<String> = Vec::new();
  let mut article: Option<ArticleState> = None;
  let mut author: Option<AuthorState> = None;
  let mut in_pub_date = false;

  loop {
    match reader.read_event() {
      Ok(Event::Start(e)) => {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        match name.as_str() {
          "PubmedArticle" => article = Some(ArticleState::default()),
          "Author" if article.is_some() => author = Some(AuthorState::default()),
          "PubDate" =>
            if let Some(state) = article.as_mut() {
              // Only the first date node counts; later ones are ignored.
              if state.date.is_none() {
                state.date = Some(DateParts::default());
                in_pub_date = true;
              }
            },
          _ => (),
        }
        path.push(name);
      },
      Ok(Event::Text(e)) => {
        let text = match e.unescape() {
          Ok(text) => text,
          Err(e) => {
            warn!("discarding batch document, undecodable text content: {e}");
            return Vec::new();
          },
        };
        if text.trim().is_empty() {
          continue;
        }
        if let Some(state) = article.as_mut() {
          record_text(state, &mut author, in_pub_date, &path, &text);
        }
      },
      Ok(Event::End(e)) => {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        path.pop();
        match name.as_str() {
          "PubmedArticle" =>
            if let Some(state) = article.take() {
              let parsed = Article {
                id:               state.id,
                title:            state.title,
                authors:          state.authors,
                publication_date: state
                  .date
                  .map(|d| d.assemble())
                  .unwrap_or_else(|| NO_DATE.to_string()),
                emails:           state.emails,
              };
              trace!("extracted article: {:?} ({:?})", parsed.id, parsed.title);
              articles.push(parsed);
            },
          "Author" =>
            if let (Some(done), Some(state)) = (author.take(), article.as_mut()) {
              state.authors.push(done.finish());
            },
          "PubDate" => in_pub_date = false,
          _ => (),
        }
      },
      Ok(Event::Eof) => break,
      Ok(_) => (),
      Err(e) => {
        warn!("discarding batch document, ill-formed XML: {e}");
        return Vec::new();
      },
    }
  }

  debug!("extracted {} articles from batch document", articles.len());
  articles
}

/// Routes one text node into the article state based on its element path.
fn record_text(
  state: &mut ArticleState,
  author: &mut Option<AuthorState>,
  in_pub_date: bool,
  path: &[String],
  text: &str,
) {
  let element = match path.last() {
    Some(element) => element.as_str(),
    None => return,
  };
  let parent = path.len().checked_sub(2).map(|i| path[i].as_str());

  match element {
    // First match wins for scalar fields, mirroring a find-first lookup.
    "PMID" if state.id.is_none() => state.id = Some(text.to_string()),
    "ArticleTitle" if state.title.is_none() => state.title = Some(text.to_string()),
    "LastName" =>
      if let Some(current) = author.as_mut() {
        current.last.push_str(text);
      },
    "ForeName" =>
      if let Some(current) = author.as_mut() {
        current.fore.push_str(text);
      },
    "Affiliation" if parent == Some("AffiliationInfo") => {
      if let Some(current) = author.as_mut() {
        current.affiliations.push(text.to_string());
      }
      // Emails are collected article-wide, even when the affiliation sits
      // outside an author node or the author never classifies as company.
      if text.contains('@') {
        state.emails.push(text.trim().to_string());
      }
    },
    "Year" if in_pub_date =>
      if let Some(date) = state.date.as_mut() {
        date.year.push_str(text);
      },
    "Month" if in_pub_date =>
      if let Some(date) = state.date.as_mut() {
        date.month.push_str(text);
      },
    "Day" if in_pub_date =>
      if let Some(date) = state.date.as_mut() {
        date.day.push_str(text);
      },
    _ => (),
  }
}

#[cfg(test)]
mod tests {
  use tracing_test::traced_test;

  use super::*;

  /// A trimmed-down but structurally faithful efetch response.
  const BATCH: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="MEDLINE">
      <PMID Version="1">31452104</PMID>
      <Article PubModel="Print-Electronic">
        <Journal>
          <JournalIssue>
            <PubDate><Year>2021</Year><Month>05</Month><Day>10</Day></PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>Engineering antibody therapeutics at scale</ArticleTitle>
        <AuthorList CompleteYN="Y">
          <Author ValidYN="Y">
            <LastName>Doe</LastName>
            <ForeName>Jane</ForeName>
            <AffiliationInfo>
              <Affiliation>Acme Pharma Inc, Cambridge, MA. jane.doe@acmepharma.com</Affiliation>
            </AffiliationInfo>
          </Author>
          <Author ValidYN="Y">
            <LastName>Smith</LastName>
            <ForeName>John</ForeName>
            <AffiliationInfo>
              <Affiliation>Department of Biology, MIT</Affiliation>
            </AffiliationInfo>
            <AffiliationInfo>
              <Affiliation>Broad Institute</Affiliation>
            </AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation Status="MEDLINE">
      <PMID Version="1">31452105</PMID>
      <Article>
        <Journal>
          <JournalIssue>
            <PubDate><Year>2020</Year></PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>A second article</ArticleTitle>
        <AuthorList>
          <Author>
            <CollectiveName>The Study Group</CollectiveName>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>
"#;

  #[traced_test]
  #[test]
  fn extracts_articles_with_authors_and_affiliations() {
    let articles = extract_articles(BATCH);
    assert_eq!(articles.len(), 2);

    let first = &articles[0];
    assert_eq!(first.id.as_deref(), Some("31452104"));
    assert_eq!(first.title.as_deref(), Some("Engineering antibody therapeutics at scale"));
    assert_eq!(first.publication_date, "2021-05-10");
    assert_eq!(first.authors.len(), 2);
    assert_eq!(first.authors[0].name, "Jane Doe");
    assert_eq!(first.authors[0].affiliations, vec![
      "Acme Pharma Inc, Cambridge, MA. jane.doe@acmepharma.com".to_string()
    ]);
    assert_eq!(first.authors[1].name, "John Smith");
    assert_eq!(first.authors[1].affiliations, vec![
      "Department of Biology, MIT".to_string(),
      "Broad Institute".to_string()
    ]);
  }

  #[test]
  fn collects_emails_article_wide() {
    let articles = extract_articles(BATCH);
    assert_eq!(articles[0].emails, vec![
      "Acme Pharma Inc, Cambridge, MA. jane.doe@acmepharma.com".to_string()
    ]);
    assert!(articles[1].emails.is_empty());
  }

  #[test]
  fn author_with_no_name_fields_gets_empty_name() {
    let articles = extract_articles(BATCH);
    // The collective-name author has neither ForeName nor LastName.
    assert_eq!(articles[1].authors.len(), 1);
    assert_eq!(articles[1].authors[0].name, "");
  }

  #[test]
  fn assembles_partial_dates() {
    let year_only = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
      <PMID>1</PMID>
      <Article><Journal><JournalIssue><PubDate><Year>2020</Year></PubDate></JournalIssue></Journal></Article>
    </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
    assert_eq!(extract_articles(year_only)[0].publication_date, "2020");

    let year_month = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
      <PMID>2</PMID>
      <Article><Journal><JournalIssue><PubDate><Year>2020</Year><Month>03</Month></PubDate></JournalIssue></Journal></Article>
    </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
    assert_eq!(extract_articles(year_month)[0].publication_date, "2020-03");
  }

  #[test]
  fn missing_date_node_yields_sentinel() {
    let no_date = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
      <PMID>3</PMID>
    </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
    assert_eq!(extract_articles(no_date)[0].publication_date, "N/A");
  }

  #[test]
  fn date_node_without_components_yields_empty_string() {
    // PubMed sometimes carries only a MedlineDate child; the components are
    // then all empty and the assembled string collapses to nothing. That is
    // distinct from the no-date sentinel.
    let medline_date = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
      <PMID>4</PMID>
      <Article><Journal><JournalIssue><PubDate><MedlineDate>2019 Nov-Dec</MedlineDate></PubDate></JournalIssue></Journal></Article>
    </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
    assert_eq!(extract_articles(medline_date)[0].publication_date, "");
  }

  #[test]
  fn only_first_date_node_is_used() {
    let two_dates = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
      <PMID>5</PMID>
      <Article><Journal><JournalIssue><PubDate><Year>2018</Year></PubDate></JournalIssue></Journal></Article>
      <Book><PubDate><Year>1999</Year></PubDate></Book>
    </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
    assert_eq!(extract_articles(two_dates)[0].publication_date, "2018");
  }

  #[test]
  fn missing_id_and_title_become_absent_not_faults() {
    let sparse = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
    </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
    let articles = extract_articles(sparse);
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, None);
    assert_eq!(articles[0].title, None);
    assert!(articles[0].authors.is_empty());
  }

  #[traced_test]
  #[test]
  fn ill_formed_document_degrades_to_empty() {
    let mismatched = "<PubmedArticleSet><PubmedArticle></Wrong></PubmedArticleSet>";
    assert!(extract_articles(mismatched).is_empty());

    let garbage = "this is not xml at all";
    assert!(extract_articles(garbage).is_empty());
  }

  #[test]
  fn empty_document_yields_no_articles() {
    assert!(extract_articles("").is_empty());
    assert!(extract_articles("<PubmedArticleSet></PubmedArticleSet>").is_empty());
  }

  #[test]
  fn extraction_is_idempotent() {
    assert_eq!(extract_articles(BATCH), extract_articles(BATCH));
  }
}
