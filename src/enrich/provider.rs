//! The provider abstraction: one trait, tagged requests and payloads.
//!
//! Every enrichment backend, remote or local, implements [`Provider`].
//! Requests and results are capability-tagged enums, so the orchestrator
//! runs the same chain logic for every capability and adding a provider
//! never touches the orchestrator.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::enrich::error::ProviderError;
use crate::enrich::types::{Analysis, Definition, SearchItem, Translation};

/// What a provider can do. Each provider declares exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Translate,
    Search,
    Analyze,
    Define,
    /// Reserved: declared for registry completeness, no bundled providers.
    Speak,
}

impl Capability {
    pub const ALL: [Self; 5] = [
        Self::Translate,
        Self::Search,
        Self::Analyze,
        Self::Define,
        Self::Speak,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Search => "search",
            Self::Analyze => "analyze",
            Self::Define => "define",
            Self::Speak => "speak",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider invocation request, tagged by capability.
#[derive(Debug, Clone)]
pub enum Request {
    Translate {
        text: String,
        source: String,
        target: String,
    },
    Search {
        query: String,
    },
    Analyze {
        title: String,
        content: String,
    },
    Define {
        word: String,
    },
}

impl Request {
    pub const fn capability(&self) -> Capability {
        match self {
            Self::Translate { .. } => Capability::Translate,
            Self::Search { .. } => Capability::Search,
            Self::Analyze { .. } => Capability::Analyze,
            Self::Define { .. } => Capability::Define,
        }
    }
}

/// A normalized provider result, tagged by capability.
#[derive(Debug, Clone)]
pub enum Payload {
    Translation(Translation),
    /// One provider's contribution to a search merge.
    SearchItems(Vec<SearchItem>),
    Analysis(Analysis),
    Definition(Definition),
}

/// Sliding-window budget for one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_requests: usize,
    pub window: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

/// Static facts about a provider: identity, capability, chain position,
/// and rate-limit budget (`None` exempts local providers).
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub name: &'static str,
    pub capability: Capability,
    /// Chain position; lower runs first.
    pub priority: u8,
    pub rate_limit: Option<RateLimit>,
}

/// A single enrichment backend.
#[async_trait]
pub trait Provider: Send + Sync {
    fn descriptor(&self) -> &Descriptor;

    /// Whether the provider can be invoked at all, derived purely from
    /// configuration. Never performs I/O.
    fn is_available(&self) -> bool;

    /// Performs one invocation. Implementations normalize their raw
    /// response before returning; an answer with nothing usable in it is
    /// [`ProviderError::NoResult`], not a success.
    async fn invoke(&self, request: &Request) -> Result<Payload, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_capability_tags() {
        let request = Request::Define {
            word: "folio".to_string(),
        };
        assert_eq!(request.capability(), Capability::Define);
        assert_eq!(request.capability().to_string(), "define");
    }

    #[test]
    fn test_default_rate_limit() {
        let limit = RateLimit::default();
        assert_eq!(limit.max_requests, 10);
        assert_eq!(limit.window, Duration::from_secs(60));
    }

    #[test]
    fn test_all_capabilities_include_speak() {
        assert!(Capability::ALL.contains(&Capability::Speak));
    }
}
