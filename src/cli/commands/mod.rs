//! Subcommand implementations.

/// Add command handler.
pub mod add;

/// Analyze command handler.
pub mod analyze;

/// Define command handler.
pub mod define;

/// Library listing command handler.
pub mod list;

/// Provider listing command handler.
pub mod providers;

/// Reader command handler.
pub mod read;

/// Remove command handler.
pub mod remove;

/// Search command handler.
pub mod search;

/// One-shot translation command handler.
pub mod translate;
