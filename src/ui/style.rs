//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Colors are
//! dropped entirely when `NO_COLOR` is set (or `--no-color` style
//! overrides land in the output config).

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Library", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.bold()))
    }

    /// Style for labels/keys (e.g., "Language", "Pages")
    pub fn label<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for primary values (e.g., document ids, provider names)
    pub fn value<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.cyan()))
    }

    /// Style for secondary/supplementary info (e.g., snippets, URLs)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for document titles
    pub fn title<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.cyan().bold()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.yellow()))
    }

    /// Style for commands (e.g., "/goto", "/help")
    pub fn command<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.green()))
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.yellow()))
    }

    /// Style for provider attribution (e.g., "via deepl", "Wikipedia")
    pub fn attribution<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.magenta()))
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        Self::apply(text, |t| format!("{}", t.dimmed().italic()))
    }

    fn apply<T: Display>(text: T, paint: impl Fn(&str) -> String) -> String {
        let plain = text.to_string();
        if output::is_no_color() {
            plain
        } else {
            paint(&plain)
        }
    }
}
