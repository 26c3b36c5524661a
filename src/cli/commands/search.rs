//! Search command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::display::print_search_results;
use crate::enrich::{Orchestrator, Registry};
use crate::ui::Spinner;

pub async fn run_search(query: &str) -> Result<()> {
    let config = ConfigManager::new().load_or_default();
    let orchestrator = Orchestrator::new(Registry::bundled(&config)?);

    let spinner = Spinner::new("Searching...");
    let results = orchestrator.search(query).await;
    spinner.stop();

    print_search_results(&results);
    Ok(())
}
