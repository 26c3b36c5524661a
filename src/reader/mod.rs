//! Interactive page-at-a-time reader.
//!
//! A REPL over one library document, with slash commands for navigation
//! and enrichment.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::ReaderSession;
