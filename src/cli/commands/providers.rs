//! Provider listing command handler.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager};
use crate::enrich::{Capability, Provider, Registry};
use crate::ui::Style;

/// Prints every bundled provider grouped by capability, with priority
/// and whether it would be used right now.
pub fn run_providers() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();
    let registry = Registry::bundled(&config)?;

    println!("{}", Style::header("Enrichment providers"));
    for capability in Capability::ALL {
        let group: Vec<_> = registry
            .all()
            .iter()
            .filter(|provider| provider.descriptor().capability == capability)
            .collect();
        if group.is_empty() {
            continue;
        }

        println!("\n  {}:", Style::label(capability.as_str()));
        for provider in group {
            let descriptor = provider.descriptor();
            println!(
                "    {:<18} {}  {}",
                descriptor.name,
                Style::secondary(format!("priority {:>2}", descriptor.priority)),
                status(provider.as_ref(), &config)
            );
        }
    }

    println!();
    println!(
        "{}",
        Style::hint(format!(
            "Keys come from [providers.<name>] in {} or the matching \
             *_API_KEY environment variable.",
            manager.config_path().display()
        ))
    );
    Ok(())
}

fn status(provider: &dyn Provider, config: &ConfigFile) -> String {
    if provider.is_available() {
        return Style::success("available");
    }

    let name = provider.descriptor().name;
    if !config.provider(name).enabled() {
        return Style::warning("disabled in config");
    }
    missing_key_hint(name).map_or_else(
        || Style::warning("not configured"),
        |hint| Style::warning(format!("not configured ({hint})")),
    )
}

fn missing_key_hint(name: &str) -> Option<&'static str> {
    match name {
        "google_translate" => Some("set GOOGLE_TRANSLATE_API_KEY"),
        "azure_translator" => Some("set AZURE_TRANSLATOR_API_KEY"),
        "deepl" => Some("set DEEPL_API_KEY"),
        "google_search" => Some("set GOOGLE_SEARCH_API_KEY and engine_id"),
        "openai" => Some("set OPENAI_API_KEY"),
        _ => None,
    }
}
