//! Provider registry: owns the bundled provider set and resolves the
//! candidates for a capability in priority order.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::ConfigFile;
use crate::enrich::provider::{Capability, Provider};
use crate::enrich::providers::{
    AzureTranslator, CuratedResources, Deepl, DuckDuckGo, GoogleSearch, GoogleTranslate,
    OpenAiAnalyze, WikipediaDefine, WikipediaSearch,
};

/// Remote calls that take longer than this are treated as failed so the
/// orchestrator can move on to the next provider.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Registry {
    providers: Vec<Arc<dyn Provider>>,
}

impl Registry {
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Builds the bundled provider set. All remote providers share one
    /// HTTP client; each reads its own `[providers.NAME]` section.
    pub fn bundled(config: &ConfigFile) -> Result<Self> {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        let wikipedia = config.provider(WikipediaSearch::NAME);

        Ok(Self::new(vec![
            Arc::new(GoogleTranslate::new(
                config
                    .provider(GoogleTranslate::NAME)
                    .with_default_env("GOOGLE_TRANSLATE_API_KEY"),
                http.clone(),
            )),
            Arc::new(AzureTranslator::new(
                config
                    .provider(AzureTranslator::NAME)
                    .with_default_env("AZURE_TRANSLATOR_API_KEY"),
                http.clone(),
            )),
            Arc::new(Deepl::new(
                config.provider(Deepl::NAME).with_default_env("DEEPL_API_KEY"),
                http.clone(),
            )),
            Arc::new(WikipediaSearch::new(wikipedia.clone(), http.clone())),
            Arc::new(GoogleSearch::new(
                config
                    .provider(GoogleSearch::NAME)
                    .with_default_env("GOOGLE_SEARCH_API_KEY"),
                http.clone(),
            )),
            Arc::new(CuratedResources::new()),
            Arc::new(OpenAiAnalyze::new(
                config
                    .provider(OpenAiAnalyze::NAME)
                    .with_default_env("OPENAI_API_KEY"),
                http.clone(),
            )),
            Arc::new(DuckDuckGo::new(config.provider(DuckDuckGo::NAME), http.clone())),
            Arc::new(WikipediaDefine::new(wikipedia, http)),
        ]))
    }

    /// Available providers for a capability, best priority first. The
    /// sort is stable, so registration order breaks ties.
    pub fn resolve(&self, capability: Capability) -> Vec<Arc<dyn Provider>> {
        let mut candidates: Vec<Arc<dyn Provider>> = self
            .providers
            .iter()
            .filter(|provider| {
                provider.descriptor().capability == capability && provider.is_available()
            })
            .cloned()
            .collect();
        candidates.sort_by_key(|provider| provider.descriptor().priority);
        candidates
    }

    /// Every registered provider, regardless of availability.
    pub fn all(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::enrich::error::ProviderError;
    use crate::enrich::provider::{Descriptor, Payload, Request};
    use async_trait::async_trait;

    struct FixedProvider {
        descriptor: Descriptor,
        available: bool,
    }

    impl FixedProvider {
        fn new(name: &'static str, capability: Capability, priority: u8, available: bool) -> Self {
            Self {
                descriptor: Descriptor {
                    name,
                    capability,
                    priority,
                    rate_limit: None,
                },
                available,
            }
        }
    }

    #[async_trait]
    impl Provider for FixedProvider {
        fn descriptor(&self) -> &Descriptor {
            &self.descriptor
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn invoke(&self, _request: &Request) -> Result<Payload, ProviderError> {
            Err(ProviderError::NoResult)
        }
    }

    #[test]
    fn test_resolve_orders_by_priority() {
        let registry = Registry::new(vec![
            Arc::new(FixedProvider::new("slow", Capability::Translate, 30, true)),
            Arc::new(FixedProvider::new("fast", Capability::Translate, 10, true)),
            Arc::new(FixedProvider::new("mid", Capability::Translate, 20, true)),
        ]);

        let names: Vec<&str> = registry
            .resolve(Capability::Translate)
            .iter()
            .map(|p| p.descriptor().name)
            .collect();
        assert_eq!(names, vec!["fast", "mid", "slow"]);
    }

    #[test]
    fn test_resolve_skips_unavailable_and_foreign_capabilities() {
        let registry = Registry::new(vec![
            Arc::new(FixedProvider::new("off", Capability::Search, 10, false)),
            Arc::new(FixedProvider::new("on", Capability::Search, 20, true)),
            Arc::new(FixedProvider::new("other", Capability::Define, 5, true)),
        ]);

        let names: Vec<&str> = registry
            .resolve(Capability::Search)
            .iter()
            .map(|p| p.descriptor().name)
            .collect();
        assert_eq!(names, vec!["on"]);
    }

    #[test]
    fn test_bundled_always_has_search_coverage() {
        let registry = Registry::bundled(&ConfigFile::default()).unwrap();

        let search = registry.resolve(Capability::Search);
        assert!(
            search
                .iter()
                .any(|p| p.descriptor().name == CuratedResources::NAME)
        );
        // Keyless services stay usable with an empty config.
        assert!(!registry.resolve(Capability::Define).is_empty());
    }
}
