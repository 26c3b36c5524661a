//! Language code validation and supported languages.

use anyhow::Result;

use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their names.
///
/// Translation targets and sources are validated against this table; it is
/// deliberately small and curated rather than "everything the providers
/// accept", so every listed pair works across all bundled providers.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("yo", "Yoruba"),
    ("ig", "Igbo"),
    ("ha", "Hausa"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("ar", "Arabic"),
    ("sw", "Swahili"),
    ("pt", "Portuguese"),
    ("de", "German"),
    ("it", "Italian"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("hi", "Hindi"),
];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Returns the display name for a supported language code.
pub fn language_name(lang: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, name)| *name)
}

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): en, yo, fr, es, ar, sw, ...\n\
             Run 'folio languages' to see all supported codes."
        )
    }
}
