//! Define command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::display::print_definition;
use crate::enrich::{Orchestrator, Registry};
use crate::ui::Spinner;

pub async fn run_define(word: &str) -> Result<()> {
    let config = ConfigManager::new().load_or_default();
    let orchestrator = Orchestrator::new(Registry::bundled(&config)?);

    let spinner = Spinner::new("Looking up...");
    let definition = orchestrator.define(word).await;
    spinner.stop();

    print_definition(&definition);
    Ok(())
}
