//! Bundled enrichment providers.
//!
//! Remote providers share one `reqwest::Client` (and its timeout) handed
//! in by the registry; each holds its own settings section from the
//! config file.

pub mod analyze;
pub mod define;
pub mod search;
pub mod translate;

pub use analyze::OpenAiAnalyze;
pub use define::{DuckDuckGo, WikipediaDefine};
pub use search::{CuratedResources, GoogleSearch, WikipediaSearch};
pub use translate::{AzureTranslator, Deepl, GoogleTranslate};

use reqwest::{Client, Response};

use crate::enrich::error::ProviderError;
use crate::enrich::normalize::WikipediaSummary;

pub(crate) const WIKIPEDIA_ENDPOINT: &str = "https://en.wikipedia.org";

/// Maps a non-2xx response to a provider error carrying status and body.
pub(crate) async fn expect_success(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ProviderError::UnexpectedResponse(format!(
            "status {status}: {body}"
        )))
    }
}

/// Fetches a Wikipedia REST page summary. Shared by the search and
/// define providers, which interpret the summary differently.
pub(crate) async fn fetch_wikipedia_summary(
    http: &Client,
    endpoint: &str,
    query: &str,
) -> Result<WikipediaSummary, ProviderError> {
    let url = format!(
        "{}/api/rest_v1/page/summary/{}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(query)
    );

    let response = expect_success(http.get(&url).send().await?).await?;
    Ok(response.json().await?)
}
