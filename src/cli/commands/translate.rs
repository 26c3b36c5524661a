//! One-shot translate command handler.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::cache::{CacheManager, CacheRequest};
use crate::config::ConfigManager;
use crate::enrich::{Orchestrator, Registry};
use crate::input::read_input;
use crate::language::validate_language;
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub to: String,
    pub from: Option<String>,
    pub no_cache: bool,
}

/// Translates a file or stdin and prints the result to stdout.
///
/// Only the translated text goes to stdout, so the command can be
/// piped; attribution goes to stderr. `--no-cache` skips the cache
/// lookup but the fresh translation is still stored.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = ConfigManager::new().load_or_default();

    validate_language(&options.to)?;
    let source = match options.from {
        Some(from) => {
            validate_language(&from)?;
            from
        }
        None => config.language().to_string(),
    };
    if source == options.to {
        bail!("Source and target language are both '{source}'");
    }

    let text = read_input(options.file.as_deref())?;
    if text.trim().is_empty() {
        bail!("No text to translate");
    }

    let cache = CacheManager::new()?;
    let request = CacheRequest {
        text: &text,
        source: &source,
        target: &options.to,
    };

    if !options.no_cache
        && let Some(cached) = cache.get(&request)?
    {
        crate::info!("Cached translation via {}.", cached.provider);
        println!("{}", cached.text);
        return Ok(());
    }

    let orchestrator = Orchestrator::new(Registry::bundled(&config)?);
    let spinner = Spinner::new("Translating...");
    let outcome = orchestrator.translate(&text, &source, &options.to).await;
    spinner.stop();

    let translation = outcome?;
    cache.put(&request, &translation)?;
    crate::info!("Translated via {}.", translation.provider);
    println!("{}", translation.text);
    Ok(())
}
