//! Add command handler.

use std::path::Path;

use anyhow::Result;

use crate::config::ConfigFile;
use crate::config::ConfigManager;
use crate::document::{Document, Library};
use crate::language::validate_language;
use crate::ui::Style;

pub struct AddOptions<'a> {
    pub file: &'a Path,
    pub title: Option<String>,
    pub lang: Option<String>,
}

/// Adds a file to the library, or reports the existing entry when the
/// same title and content were ingested before.
pub fn run_add(options: AddOptions) -> Result<()> {
    let config = ConfigManager::new().load_or_default();
    let mut library = Library::open_default()?;

    let (id, added) = ingest(&mut library, options.file, options.title, options.lang, &config)?;
    if !added {
        crate::info!("Already in the library as {id}.");
        return Ok(());
    }

    library.save()?;
    let document = library.find(&id)?;
    println!(
        "{} Added {} {}",
        Style::success("✓"),
        Style::title(&document.title),
        Style::secondary(format!("({} pages, id {id})", document.page_count()))
    );
    Ok(())
}

/// Ingests a file into the library, reusing the entry from a previous
/// ingest of the same title and content. Returns the document id and
/// whether a new entry was created; the caller decides when to save.
pub fn ingest(
    library: &mut Library,
    file: &Path,
    title: Option<String>,
    lang: Option<String>,
    config: &ConfigFile,
) -> Result<(String, bool)> {
    let language = lang.unwrap_or_else(|| config.language().to_string());
    validate_language(&language)?;

    let document = Document::from_file(file, title, &language, config.words_per_page())?;
    if let Some(existing) = library.find_same(&document.title, document.original_content()) {
        return Ok((existing.id.clone(), false));
    }

    let id = library.add(document).id.clone();
    Ok((id, true))
}
