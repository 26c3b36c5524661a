//! Search providers: Wikipedia, Google Custom Search, and the curated
//! educational-resource list.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ProviderConfig;
use crate::enrich::error::ProviderError;
use crate::enrich::normalize;
use crate::enrich::provider::{Capability, Descriptor, Payload, Provider, Request};
use crate::enrich::types::SearchItem;

use super::{WIKIPEDIA_ENDPOINT, expect_success, fetch_wikipedia_summary};

const GOOGLE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com";
const GOOGLE_SEARCH_RESULTS: u8 = 3;

/// Wikipedia page-summary lookup. Keyless, so available by default.
pub struct WikipediaSearch {
    descriptor: Descriptor,
    settings: ProviderConfig,
    http: Client,
}

impl WikipediaSearch {
    pub const NAME: &'static str = "wikipedia";

    pub fn new(settings: ProviderConfig, http: Client) -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Search,
                priority: 10,
                rate_limit: Some(settings.rate_limit_or_default()),
            },
            settings,
            http,
        }
    }

    fn endpoint(&self) -> &str {
        self.settings
            .endpoint
            .as_deref()
            .unwrap_or(WIKIPEDIA_ENDPOINT)
    }
}

#[async_trait]
impl Provider for WikipediaSearch {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        self.settings.enabled()
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Search { query } = request else {
            return Err(ProviderError::CapabilityMismatch);
        };

        let raw = fetch_wikipedia_summary(&self.http, self.endpoint(), query).await?;
        let item = normalize::wikipedia_search_item(query, raw).ok_or(ProviderError::NoResult)?;
        Ok(Payload::SearchItems(vec![item]))
    }
}

/// Google Programmable Search (Custom Search JSON API).
pub struct GoogleSearch {
    descriptor: Descriptor,
    settings: ProviderConfig,
    http: Client,
}

impl GoogleSearch {
    pub const NAME: &'static str = "google_search";

    pub fn new(settings: ProviderConfig, http: Client) -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Search,
                priority: 20,
                rate_limit: Some(settings.rate_limit_or_default()),
            },
            settings,
            http,
        }
    }

    fn endpoint(&self) -> &str {
        self.settings
            .endpoint
            .as_deref()
            .unwrap_or(GOOGLE_SEARCH_ENDPOINT)
    }
}

#[async_trait]
impl Provider for GoogleSearch {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        self.settings.enabled()
            && self.settings.api_key().is_some()
            && self.settings.engine_id.is_some()
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Search { query } = request else {
            return Err(ProviderError::CapabilityMismatch);
        };
        let api_key = self.settings.api_key().ok_or(ProviderError::NotConfigured)?;
        let engine_id = self
            .settings
            .engine_id
            .as_deref()
            .ok_or(ProviderError::NotConfigured)?;

        let url = format!(
            "{}/customsearch/v1?key={api_key}&cx={engine_id}&q={}&num={GOOGLE_SEARCH_RESULTS}",
            self.endpoint().trim_end_matches('/'),
            urlencoding::encode(query)
        );

        let response = expect_success(self.http.get(&url).send().await?).await?;
        let raw: normalize::GoogleSearchResponse = response.json().await?;

        let items = normalize::google_search_items(raw);
        if items.is_empty() {
            return Err(ProviderError::NoResult);
        }
        Ok(Payload::SearchItems(items))
    }
}

/// Static educational-resource links. Always available, never fails, and
/// exempt from rate limiting, so a search can never come back empty.
pub struct CuratedResources {
    descriptor: Descriptor,
}

impl CuratedResources {
    pub const NAME: &'static str = "curated";

    pub fn new() -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Search,
                priority: 90,
                rate_limit: None,
            },
        }
    }
}

impl Default for CuratedResources {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for CuratedResources {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Search { query } = request else {
            return Err(ProviderError::CapabilityMismatch);
        };
        Ok(Payload::SearchItems(curated_items(query)))
    }
}

fn curated_items(query: &str) -> Vec<SearchItem> {
    let encoded = urlencoding::encode(query);
    vec![
        SearchItem {
            title: format!("{query} - Khan Academy"),
            snippet: format!(
                "Learn about {query} with free online courses, lessons, and practice exercises from Khan Academy."
            ),
            url: format!(
                "https://www.khanacademy.org/search?referer=%2F&page_search_query={encoded}"
            ),
            source: "Khan Academy".to_string(),
        },
        SearchItem {
            title: format!("{query} - Coursera"),
            snippet: format!(
                "Explore {query} courses from top universities and companies. Get certified upon completion."
            ),
            url: format!("https://www.coursera.org/search?query={encoded}"),
            source: "Coursera".to_string(),
        },
        SearchItem {
            title: format!("{query} Video Tutorials - YouTube"),
            snippet: format!(
                "Watch comprehensive video tutorials about {query} from educators and professionals."
            ),
            url: format!("https://www.youtube.com/results?search_query={encoded}"),
            source: "YouTube Education".to_string(),
        },
        SearchItem {
            title: format!("{query} Research Papers - Google Scholar"),
            snippet: format!(
                "Find academic papers and research articles about {query} from scholars worldwide."
            ),
            url: format!("https://scholar.google.com/scholar?q={encoded}"),
            source: "Google Scholar".to_string(),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_curated_always_produces_four_items() {
        let provider = CuratedResources::new();
        assert!(provider.is_available());
        assert!(provider.descriptor().rate_limit.is_none());

        let request = Request::Search {
            query: "photosynthesis".to_string(),
        };
        let payload = provider.invoke(&request).await.unwrap();

        let Payload::SearchItems(items) = payload else {
            panic!("expected search items");
        };
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].source, "Khan Academy");
        assert_eq!(items[3].source, "Google Scholar");
        assert!(items[0].url.contains("page_search_query=photosynthesis"));
    }

    #[test]
    fn test_curated_encodes_query_in_urls() {
        let items = curated_items("rust programming");
        for item in &items {
            assert!(item.url.contains("rust%20programming"), "url: {}", item.url);
        }
    }

    #[test]
    fn test_wikipedia_is_keyless() {
        let provider = WikipediaSearch::new(ProviderConfig::default(), Client::new());
        assert!(provider.is_available());
    }

    #[test]
    fn test_google_search_needs_key_and_engine() {
        let http = Client::new();
        let keyless = GoogleSearch::new(ProviderConfig::default(), http.clone());
        assert!(!keyless.is_available());

        let key_only = GoogleSearch::new(
            ProviderConfig {
                api_key: Some("secret".to_string()),
                ..ProviderConfig::default()
            },
            http.clone(),
        );
        assert!(!key_only.is_available());

        let complete = GoogleSearch::new(
            ProviderConfig {
                api_key: Some("secret".to_string()),
                engine_id: Some("cse123".to_string()),
                ..ProviderConfig::default()
            },
            http,
        );
        assert!(complete.is_available());
    }
}
