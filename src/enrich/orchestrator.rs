//! Capability orchestration over the provider registry.
//!
//! Policies differ per capability. Translation walks the provider chain
//! and stops at the first success. Analysis does the same but can always
//! fall back to the built-in analyzer. Search and definitions fan out to
//! every admitted provider concurrently; search merges all contributions,
//! definitions keep the best-ranked success. Rate limiting is enforced
//! here, before any provider is invoked.

use std::sync::Arc;

use futures_util::future::join_all;

use crate::enrich::analysis;
use crate::enrich::error::{EnrichError, ProviderError};
use crate::enrich::provider::{Capability, Descriptor, Payload, Provider, Request};
use crate::enrich::ratelimit::RateLimiter;
use crate::enrich::registry::Registry;
use crate::enrich::types::{Analysis, Definition, SearchResults, Translation};

pub struct Orchestrator {
    registry: Registry,
    limiter: RateLimiter,
}

impl Orchestrator {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            limiter: RateLimiter::new(),
        }
    }

    /// Translates `text`, trying providers in priority order and keeping
    /// the first usable result.
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, EnrichError> {
        let request = Request::Translate {
            text: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        };

        let candidates = self.admitted(Capability::Translate);
        let attempts = candidates.len();
        for provider in candidates {
            let name = provider.descriptor().name;
            match provider.invoke(&request).await {
                Ok(Payload::Translation(translation)) => return Ok(translation),
                Ok(_) => crate::warn!("{name} returned an unexpected payload"),
                Err(err) => crate::warn!("{name} translation failed: {err}"),
            }
        }

        Err(EnrichError::AllProvidersExhausted {
            capability: Capability::Translate,
            attempts,
        })
    }

    /// Analyzes a document. Remote analysis is attempted first; when no
    /// remote provider delivers, the built-in analyzer answers instead,
    /// so this never fails.
    pub async fn analyze(&self, title: &str, content: &str) -> Analysis {
        let request = Request::Analyze {
            title: title.to_string(),
            content: content.to_string(),
        };

        for provider in self.admitted(Capability::Analyze) {
            let name = provider.descriptor().name;
            match provider.invoke(&request).await {
                Ok(Payload::Analysis(done)) => return done,
                Ok(_) => crate::warn!("{name} returned an unexpected payload"),
                Err(err) => crate::warn!("{name} analysis failed: {err}"),
            }
        }

        crate::info!("Remote analysis unavailable, using built-in analysis");
        analysis::local(title, content)
    }

    /// Searches every admitted provider concurrently and merges their
    /// contributions in priority order. The curated provider is always
    /// among the candidates, so the result is never empty.
    pub async fn search(&self, query: &str) -> SearchResults {
        let request = Request::Search {
            query: query.to_string(),
        };

        let mut items = Vec::new();
        for (name, outcome) in self.fan_out(&request).await {
            match outcome {
                Ok(Payload::SearchItems(contribution)) => items.extend(contribution),
                Ok(_) => crate::warn!("{name} returned an unexpected payload"),
                Err(err) => crate::warn!("{name} search failed: {err}"),
            }
        }

        let summary = items
            .iter()
            .find(|item| item.source == "Wikipedia")
            .map_or_else(
                || format!("Search results for \"{query}\""),
                |item| item.snippet.clone(),
            );

        SearchResults { summary, items }
    }

    /// Looks up a word with every admitted provider concurrently and
    /// keeps the best-ranked success. Falls back to a stock definition
    /// when nothing answers.
    pub async fn define(&self, word: &str) -> Definition {
        let request = Request::Define {
            word: word.to_string(),
        };

        for (name, outcome) in self.fan_out(&request).await {
            match outcome {
                Ok(Payload::Definition(definition)) => return definition,
                Ok(_) => crate::warn!("{name} returned an unexpected payload"),
                Err(err) => crate::warn!("{name} definition lookup failed: {err}"),
            }
        }

        Definition::fallback(word)
    }

    /// Resolves the capability's providers and drops any that are out of
    /// rate-limit budget. Denied providers are skipped, not queued.
    fn admitted(&self, capability: Capability) -> Vec<Arc<dyn Provider>> {
        self.registry
            .resolve(capability)
            .into_iter()
            .filter(|provider| {
                let descriptor = provider.descriptor();
                if self.admit(descriptor) {
                    true
                } else {
                    crate::info!("Skipping {}: rate limit reached", descriptor.name);
                    false
                }
            })
            .collect()
    }

    fn admit(&self, descriptor: &Descriptor) -> bool {
        descriptor.rate_limit.is_none_or(|limit| {
            self.limiter
                .try_admit(descriptor.name, limit.max_requests, limit.window)
        })
    }

    /// Invokes every admitted provider concurrently. Outcomes come back
    /// paired with provider names, in priority order.
    async fn fan_out(
        &self,
        request: &Request,
    ) -> Vec<(&'static str, Result<Payload, ProviderError>)> {
        let candidates = self.admitted(request.capability());
        let outcomes = join_all(
            candidates
                .iter()
                .map(|provider| provider.invoke(request)),
        )
        .await;

        candidates
            .iter()
            .map(|provider| provider.descriptor().name)
            .zip(outcomes)
            .collect()
    }
}
