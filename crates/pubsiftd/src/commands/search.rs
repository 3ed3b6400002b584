//! The "search" command: the full query → fetch → filter → render pipeline.

use super::*;

/// Arguments for the [`Commands::Search`] command.
#[derive(Args)]
pub struct SearchOptions {
  /// PubMed search query, e.g. "cancer immunotherapy"
  pub query: String,

  /// Maximum number of results to fetch
  #[arg(short, long, default_value_t = 100)]
  pub max_results: usize,

  /// Write the report as CSV to this path instead of printing it
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Print the report as JSON instead of the console view
  #[arg(long, conflicts_with = "output")]
  pub json: bool,

  /// TOML file replacing the classifier keyword tables
  #[arg(long)]
  pub keywords: Option<PathBuf>,

  /// NCBI API key (falls back to the NCBI_API_KEY environment variable)
  #[arg(long)]
  pub api_key: Option<String>,
}

/// Function for the [`Commands::Search`] in the CLI.
///
/// Each empty stage (no PMIDs, empty fetch, nothing parseable, nothing
/// company-affiliated) ends the run gracefully with a console notice rather
/// than an error — only transport and configuration faults propagate.
pub async fn search(search_options: SearchOptions) -> Result<()> {
  let SearchOptions { query, max_results, output, json, keywords, api_key } = search_options;

  debug!("searching PubMed for {query:?} (max {max_results})");
  let classifier = match &keywords {
    Some(path) => {
      debug!("loading keyword tables from {}", path.display());
      AffiliationClassifier::from_config_file(path)?
    },
    None => AffiliationClassifier::new(),
  };

  let mut client = PubMedClient::new();
  if let Some(key) = api_key.or_else(|| std::env::var("NCBI_API_KEY").ok()) {
    client = client.with_api_key(key);
  }

  reply_info(&format!("Searching PubMed for: {query}"));
  let pmids = client.search(&query, max_results).await?;
  if pmids.is_empty() {
    reply_info("No articles matched the query");
    return Ok(());
  }
  reply_info(&format!("Found {} matching PMIDs", pmids.len()));
  trace!("esearch PMIDs: {pmids:?}");

  let batch = client.fetch(&pmids).await?;
  if batch.is_empty() {
    reply_warning("Metadata fetch returned an empty document");
    return Ok(());
  }

  let articles = extract_articles(&batch);
  if articles.is_empty() {
    reply_warning("No parseable articles in the fetched metadata");
    return Ok(());
  }
  reply_info(&format!("Parsed {} articles", articles.len()));

  let records = filter_articles(&articles, &classifier);
  if records.is_empty() {
    reply_info("No company-affiliated articles found");
    return Ok(());
  }
  reply_success(&format!(
    "{} of {} articles have a company-affiliated author",
    records.len(),
    articles.len()
  ));

  if json {
    print_json(&records)
  } else if let Some(path) = output {
    write_csv(&path, &records)?;
    reply_success(&format!("Report written to {}", path.display()));
    Ok(())
  } else {
    render_records(&records);
    Ok(())
  }
}
