//! Read command handler: opens the interactive reader.

use std::path::Path;

use anyhow::Result;

use crate::cache::CacheManager;
use crate::cli::commands::add::ingest;
use crate::config::{ConfigFile, ConfigManager};
use crate::document::Library;
use crate::enrich::{Orchestrator, Registry};
use crate::reader::ReaderSession;

/// Opens a library document selected by id or title.
pub async fn run_read(selector: &str) -> Result<()> {
    let config = ConfigManager::new().load_or_default();
    let library = Library::open_default()?;
    let id = library.find(selector)?.id.clone();
    open_session(library, id, &config).await
}

/// Opens a file straight from disk, adding it to the library first when
/// it has not been ingested before.
pub async fn run_open_file(path: &Path) -> Result<()> {
    let config = ConfigManager::new().load_or_default();
    let mut library = Library::open_default()?;

    let (id, added) = ingest(&mut library, path, None, None, &config)?;
    if added {
        library.save()?;
        crate::info!("Added to the library as {id}.");
    }
    open_session(library, id, &config).await
}

async fn open_session(library: Library, id: String, config: &ConfigFile) -> Result<()> {
    let orchestrator = Orchestrator::new(Registry::bundled(config)?);
    let cache = CacheManager::new()?;
    let mut session = ReaderSession::new(library, id, orchestrator, cache, config.words_per_page());
    session.run().await
}
