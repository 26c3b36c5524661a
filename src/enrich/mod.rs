//! Document enrichment: translation, search, definitions, and analysis
//! through interchangeable providers.
//!
//! Every backend implements [`Provider`] and registers a [`Descriptor`]
//! with the [`Registry`]; the [`Orchestrator`] applies a per-capability
//! policy (first success or concurrent fan-out) over the registry's
//! priority-ordered candidates. Degraded results are first-class: the
//! built-in analyzer and the fallback definition answer when remote
//! providers cannot, and attribute themselves so callers can tell.

pub mod analysis;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod ratelimit;
pub mod registry;
pub mod types;

pub use error::{EnrichError, ProviderError};
pub use orchestrator::Orchestrator;
pub use provider::{Capability, Descriptor, Payload, Provider, RateLimit, Request};
pub use ratelimit::RateLimiter;
pub use registry::Registry;
pub use types::{
    Analysis, Definition, Difficulty, DocumentStats, SearchItem, SearchResults, Translation,
};
