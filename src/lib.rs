//! # folio - Terminal Reading Companion
//!
//! `folio` keeps a library of text documents, paginates them for the
//! terminal, and enriches reading with translation, web search, word
//! lookups, and document analysis. Remote providers are optional: each
//! capability falls through a priority-ordered chain and the built-in
//! fallbacks keep everything working offline.
//!
//! ## Features
//!
//! - **Library**: Ingest text and markdown files, paginated by word count
//! - **Reader**: Slash-command driven reading sessions (`/next`, `/lang fr`, ...)
//! - **Translation**: Google, Azure, and DeepL chains with a SQLite cache
//! - **Search & lookup**: Wikipedia, Google, DuckDuckGo, plus curated links
//! - **Analysis**: AI summaries with a local readability fallback
//!
//! ## Quick Start
//!
//! ```bash
//! # Open a document (added to the library on first read)
//! folio ./notes.md
//!
//! # List the library
//! folio
//!
//! # Translate a file without opening the reader
//! folio translate --to fr ./notes.md
//!
//! # Look things up
//! folio define serendipity
//! folio search "rust borrow checker"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/folio/config.toml`:
//!
//! ```toml
//! [folio]
//! language = "en"
//! words_per_page = 300
//!
//! [providers.deepl]
//! api_key_env = "DEEPL_API_KEY"
//!
//! [providers.google_search]
//! api_key = "..."
//! engine_id = "..."
//! ```

/// Translation cache management using `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Shared stdout rendering for pages, listings, and enrichment results.
pub mod display;

/// Document model, pagination, and the persistent library.
pub mod document;

/// Enrichment providers and the fallback orchestrator.
pub mod enrich;

/// Input reading from files and stdin.
pub mod input;

/// Supported languages and code validation.
pub mod language;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Interactive reading sessions.
pub mod reader;

/// Terminal UI components (spinner, colors).
pub mod ui;
