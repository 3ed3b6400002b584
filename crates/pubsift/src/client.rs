//! Client for the NCBI E-utilities API.
//!
//! Two endpoints are used:
//!
//! - `esearch` — query string in, ranked PMIDs out (JSON)
//! - `efetch` — PMIDs in, raw batch metadata document out (XML)
//!
//! The client is a thin collaborator around the core pipeline: it performs
//! the only I/O in the crate and runs strictly before extraction. Transport
//! failures propagate as [`PubsiftError::Network`]; there is no retry,
//! pagination, or rate-limit handling. Registered NCBI API keys raise the
//! request quota and can be attached with [`PubMedClient::with_api_key`].
//!
//! # Examples
//!
//! ```no_run
//! use pubsift::client::PubMedClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PubMedClient::new();
//! let pmids = client.search("crispr delivery", 20).await?;
//! let batch = client.fetch(&pmids).await?;
//! println!("fetched {} bytes of metadata", batch.len());
//! # Ok(())
//! # }
//! ```

use super::*;

/// NCBI esearch endpoint.
const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
/// NCBI efetch endpoint.
const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// Client for searching PubMed and fetching article metadata.
#[derive(Debug, Clone, Default)]
pub struct PubMedClient {
  /// Shared HTTP client, reused across both endpoints.
  client:  reqwest::Client,
  /// Optional NCBI API key, appended to every request when set.
  api_key: Option<String>,
}

/// Top-level esearch JSON response.
#[derive(Debug, Deserialize)]
struct EsearchResponse {
  /// API-level error message; when present the result envelope is missing.
  #[serde(default)]
  error:         Option<String>,
  /// Result envelope; absent on API-level errors.
  #[serde(default)]
  esearchresult: EsearchResult,
}

/// The esearch result envelope.
#[derive(Debug, Default, Deserialize)]
struct EsearchResult {
  /// Matching PMIDs in ranked order.
  #[serde(default)]
  idlist: Vec<String>,
}

impl PubMedClient {
  /// Creates a client with no API key configured.
  pub fn new() -> Self { Self::default() }

  /// Attaches an NCBI API key to every request.
  pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
    self.api_key = Some(key.into());
    self
  }

  /// Query parameters shared by both endpoints.
  fn base_params(&self, retmode: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![("db", "pubmed".to_string()), ("retmode", retmode.to_string())];
    if let Some(key) = &self.api_key {
      params.push(("api_key", key.clone()));
    }
    params
  }

  /// Searches PubMed and returns matching PMIDs in ranked order.
  ///
  /// A query that matches nothing returns an empty list, which downstream
  /// stages treat as "nothing to process".
  ///
  /// # Errors
  ///
  /// Returns [`PubsiftError::Network`] for transport/HTTP failures,
  /// [`PubsiftError::Serialize`] if the response body isn't the expected
  /// esearch JSON, and [`PubsiftError::ApiError`] when the API answers with
  /// an error body (e.g. an invalid API key) instead of a result envelope.
  pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
    let mut params = self.base_params("json");
    params.push(("term", query.to_string()));
    params.push(("retmax", max_results.to_string()));

    debug!("esearch query: {query:?} (retmax {max_results})");
    let response =
      self.client.get(ESEARCH_URL).query(&params).send().await?.error_for_status()?;
    let body = response.text().await?;
    trace!("esearch response: {body}");

    let pmids = parse_esearch(&body)?;
    debug!("esearch returned {} PMIDs", pmids.len());
    Ok(pmids)
  }

  /// Fetches the raw metadata batch document for a list of PMIDs.
  ///
  /// An empty PMID list short-circuits to an empty document without a
  /// network round trip; the extractor then produces zero articles from it.
  ///
  /// # Errors
  ///
  /// Returns [`PubsiftError::Network`] for transport/HTTP failures.
  pub async fn fetch(&self, pmids: &[String]) -> Result<String> {
    if pmids.is_empty() {
      return Ok(String::new());
    }

    let mut params = self.base_params("xml");
    params.push(("id", pmids.join(",")));

    debug!("efetch for {} PMIDs", pmids.len());
    let response =
      self.client.get(EFETCH_URL).query(&params).send().await?.error_for_status()?;
    let xml = response.text().await?;
    trace!("efetch returned {} bytes", xml.len());
    Ok(xml)
  }
}

/// Extracts the PMID list from an esearch response body.
///
/// A zero-match query legitimately yields an empty list; an API-level error
/// body is surfaced as [`PubsiftError::ApiError`] so the two cases don't
/// collapse to the same signal.
fn parse_esearch(body: &str) -> Result<Vec<String>> {
  let parsed: EsearchResponse = serde_json::from_str(body)?;
  if let Some(message) = parsed.error {
    return Err(PubsiftError::ApiError(message));
  }
  Ok(parsed.esearchresult.idlist)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn esearch_response_yields_pmids() {
    let body = r#"{
      "header": {"type": "esearch", "version": "0.3"},
      "esearchresult": {"count": "2", "retmax": "2", "retstart": "0",
                        "idlist": ["31452104", "31452105"]}
    }"#;
    assert_eq!(parse_esearch(body).unwrap(), vec![
      "31452104".to_string(),
      "31452105".to_string()
    ]);
  }

  #[test]
  fn esearch_zero_matches_yield_empty_list() {
    let body = r#"{"esearchresult": {"count": "0", "idlist": []}}"#;
    assert!(parse_esearch(body).unwrap().is_empty());
  }

  #[test]
  fn esearch_error_body_is_surfaced_not_swallowed() {
    // An API-level error comes back without a result envelope; it must not
    // masquerade as a zero-match search.
    let body = r#"{"error": "API key invalid"}"#;
    match parse_esearch(body) {
      Err(PubsiftError::ApiError(message)) => assert_eq!(message, "API key invalid"),
      other => panic!("expected ApiError, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn empty_pmid_list_skips_the_network() {
    let batch = PubMedClient::new().fetch(&[]).await.unwrap();
    assert!(batch.is_empty());
  }

  // Live API test, run with `cargo test -- --ignored` when online.
  #[ignore]
  #[tokio::test]
  async fn live_search_and_fetch() {
    let client = PubMedClient::new();
    let pmids = client.search("cancer immunotherapy", 3).await.unwrap();
    assert!(!pmids.is_empty());
    let batch = client.fetch(&pmids).await.unwrap();
    assert!(batch.contains("<PubmedArticle"));
  }
}
