//! Canonical result shapes shared by all providers of a capability.
//!
//! Providers answer in their own wire formats; the normalizer maps every
//! one of them into these types, so the orchestrator and the CLI never
//! see a provider-specific shape.

use serde::{Deserialize, Serialize};

/// Attribution used for results produced locally rather than by a
/// remote provider.
pub const LOCAL_SOURCE: &str = "folio";

/// A completed translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    /// Name of the provider that produced the text.
    pub provider: String,
}

/// One merged search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub snippet: String,
    pub url: String,
    pub source: String,
}

/// The merged outcome of a search fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub summary: String,
    pub items: Vec<SearchItem>,
}

/// A dictionary definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub word: String,
    pub definition: String,
    pub source: String,
    pub url: Option<String>,
}

impl Definition {
    /// The built-in shape returned when no provider had a definition.
    pub fn fallback(word: &str) -> Self {
        Self {
            word: word.to_string(),
            definition: format!(
                "No definition found for \"{word}\". \
                 Try checking the spelling or search for related terms."
            ),
            source: LOCAL_SOURCE.to_string(),
            url: None,
        }
    }

    /// Whether this definition is the built-in fallback.
    pub fn is_fallback(&self) -> bool {
        self.source == LOCAL_SOURCE
    }
}

/// Reading difficulty, from average word and sentence lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Surface statistics for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Estimated reading time in minutes, at 200 words per minute.
    pub reading_minutes: usize,
    pub difficulty: Difficulty,
}

/// The outcome of document analysis, AI-backed or local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub title: String,
    pub stats: DocumentStats,
    pub summary: String,
    pub key_points: Vec<String>,
    pub main_topics: Vec<String>,
    /// Name of the provider that produced the analysis ([`LOCAL_SOURCE`]
    /// for the built-in analyzer).
    pub provider: String,
}

impl Analysis {
    /// Whether this analysis came from the built-in analyzer rather than
    /// a remote provider.
    pub fn is_local(&self) -> bool {
        self.provider == LOCAL_SOURCE
    }
}
