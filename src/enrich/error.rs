//! Enrichment error taxonomy.
//!
//! A [`ProviderError`] describes one failed provider attempt; the
//! orchestrator logs it and moves on. Only [`EnrichError`] crosses the
//! enrichment boundary, and only for capabilities that have no local
//! fallback. Degraded results (local analysis, fallback definitions,
//! curated-only search results) are successes, not errors.

use thiserror::Error;

use crate::enrich::provider::Capability;

/// Why a single provider attempt produced nothing usable.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider was invoked without the configuration it needs.
    /// Registry resolution filters these out, so this only surfaces when
    /// a provider is invoked directly.
    #[error("provider is not configured")]
    NotConfigured,

    /// The request and the provider's capability do not match.
    #[error("request does not match provider capability")]
    CapabilityMismatch,

    /// Transport-level failure: connect, timeout, TLS, non-2xx status.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response decoded, but not into anything usable.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The provider answered properly but had nothing for this input.
    #[error("no result")]
    NoResult,
}

/// Terminal enrichment failure.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Every provider in the capability's chain was skipped or failed.
    #[error("no {capability} provider produced a result ({attempts} attempted)")]
    AllProvidersExhausted {
        capability: Capability,
        attempts: usize,
    },
}
