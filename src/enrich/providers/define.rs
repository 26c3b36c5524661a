//! Definition providers: DuckDuckGo Instant Answers and Wikipedia
//! summaries. Both are keyless.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ProviderConfig;
use crate::enrich::error::ProviderError;
use crate::enrich::normalize;
use crate::enrich::provider::{Capability, Descriptor, Payload, Provider, Request};

use super::{WIKIPEDIA_ENDPOINT, expect_success, fetch_wikipedia_summary};

const DUCKDUCKGO_ENDPOINT: &str = "https://api.duckduckgo.com";

/// DuckDuckGo Instant Answer API. Preferred for definitions because its
/// abstracts read like dictionary entries.
pub struct DuckDuckGo {
    descriptor: Descriptor,
    settings: ProviderConfig,
    http: Client,
}

impl DuckDuckGo {
    pub const NAME: &'static str = "duckduckgo";

    pub fn new(settings: ProviderConfig, http: Client) -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Define,
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
            .unwrap_or(DUCKDUCKGO_ENDPOINT)
    }
}

#[async_trait]
impl Provider for DuckDuckGo {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        self.settings.enabled()
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Define { word } = request else {
            return Err(ProviderError::CapabilityMismatch);
        };

        let url = format!(
            "{}/?q={}&format=json&no_html=1&skip_disambig=1",
            self.endpoint().trim_end_matches('/'),
            urlencoding::encode(word)
        );

        let response = expect_success(self.http.get(&url).send().await?).await?;
        let raw: normalize::DuckDuckGoResponse = response.json().await?;

        let definition =
            normalize::duckduckgo_definition(word, raw).ok_or(ProviderError::NoResult)?;
        Ok(Payload::Definition(definition))
    }
}

/// Wikipedia page summaries doubling as encyclopedic definitions. Shares
/// the `wikipedia` settings section (and rate window) with the search
/// provider since both hit the same service.
pub struct WikipediaDefine {
    descriptor: Descriptor,
    settings: ProviderConfig,
    http: Client,
}

impl WikipediaDefine {
    pub const NAME: &'static str = "wikipedia";

    pub fn new(settings: ProviderConfig, http: Client) -> Self {
        Self {
            descriptor: Descriptor {
                name: Self::NAME,
                capability: Capability::Define,
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
            .unwrap_or(WIKIPEDIA_ENDPOINT)
    }
}

#[async_trait]
impl Provider for WikipediaDefine {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_available(&self) -> bool {
        self.settings.enabled()
    }

    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError> {
        let Request::Define { word } = request else {
            return Err(ProviderError::CapabilityMismatch);
        };

        let raw = fetch_wikipedia_summary(&self.http, self.endpoint(), word).await?;
        let definition =
            normalize::wikipedia_definition(word, raw).ok_or(ProviderError::NoResult)?;
        Ok(Payload::Definition(definition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_keyless_providers_available_by_default() {
        let http = Client::new();
        assert!(DuckDuckGo::new(ProviderConfig::default(), http.clone()).is_available());
        assert!(WikipediaDefine::new(ProviderConfig::default(), http).is_available());
    }

    #[test]
    fn test_duckduckgo_outranks_wikipedia() {
        let http = Client::new();
        let ddg = DuckDuckGo::new(ProviderConfig::default(), http.clone());
        let wiki = WikipediaDefine::new(ProviderConfig::default(), http);
        assert!(ddg.descriptor().priority < wiki.descriptor().priority);
    }

    #[test]
    fn test_disabled_section_turns_provider_off() {
        let settings = ProviderConfig {
            enabled: Some(false),
            ..ProviderConfig::default()
        };
        let ddg = DuckDuckGo::new(settings, Client::new());
        assert!(!ddg.is_available());
    }
}
