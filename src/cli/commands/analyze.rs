//! Analyze command handler.

use std::path::Path;

use anyhow::{Result, bail};

use crate::config::ConfigManager;
use crate::display::print_analysis;
use crate::enrich::{Orchestrator, Registry};
use crate::input::read_input;
use crate::ui::Spinner;

/// Analyzes a file or stdin. Falls back to the built-in analysis when
/// no AI provider is configured, so this also works offline.
pub async fn run_analyze(file: Option<&Path>) -> Result<()> {
    let config = ConfigManager::new().load_or_default();

    let content = read_input(file)?;
    if content.trim().is_empty() {
        bail!("No text to analyze");
    }
    let title = file
        .and_then(Path::file_stem)
        .map_or_else(|| "stdin".to_string(), |stem| stem.to_string_lossy().into_owned());

    let orchestrator = Orchestrator::new(Registry::bundled(&config)?);
    let spinner = Spinner::new("Analyzing...");
    let analysis = orchestrator.analyze(&title, &content).await;
    spinner.stop();

    print_analysis(&analysis);
    Ok(())
}
