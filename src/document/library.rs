//! The on-disk document library.
//!
//! All documents live in a single JSON file under the data directory,
//! written atomically. No other module reads or writes that file, so the
//! on-disk format can change without touching the rest of the crate.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::document::model::Document;
use crate::paths;

const LIBRARY_FILE: &str = "library.json";

/// On-disk shape of the library file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryFile {
    documents: Vec<Document>,
}

/// The user's document collection, loaded from and saved to one JSON file.
#[derive(Debug)]
pub struct Library {
    path: PathBuf,
    documents: Vec<Document>,
}

impl Library {
    /// Opens the library at the default data-dir location, creating an
    /// empty one in memory if the file does not exist yet.
    pub fn open_default() -> Result<Self> {
        Self::open(paths::data_dir().join(LIBRARY_FILE))
    }

    /// Opens a library stored at `path`.
    pub fn open(path: PathBuf) -> Result<Self> {
        let documents = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read library: {}", path.display()))?;
            let file: LibraryFile = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse library: {}", path.display()))?;
            file.documents
        } else {
            Vec::new()
        };

        Ok(Self { path, documents })
    }

    /// Writes the library back to disk atomically.
    pub fn save(&self) -> Result<()> {
        let file = LibraryFile {
            documents: self.documents.clone(),
        };
        let contents =
            serde_json::to_string_pretty(&file).context("Failed to serialize library")?;
        atomic_write(&self.path, &contents)
            .with_context(|| format!("Failed to write library: {}", self.path.display()))
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Adds a document and returns a reference to it.
    pub fn add(&mut self, document: Document) -> &Document {
        self.documents.push(document);
        // just pushed, so the vec is non-empty
        &self.documents[self.documents.len() - 1]
    }

    /// Finds a document by selector: exact id, unique id prefix, exact
    /// title, or unique case-insensitive title prefix.
    pub fn find(&self, selector: &str) -> Result<&Document> {
        let index = self.resolve(selector)?;
        Ok(&self.documents[index])
    }

    /// Mutable variant of [`Library::find`].
    pub fn find_mut(&mut self, selector: &str) -> Result<&mut Document> {
        let index = self.resolve(selector)?;
        Ok(&mut self.documents[index])
    }

    /// Removes and returns the document matching `selector`.
    pub fn remove(&mut self, selector: &str) -> Result<Document> {
        let index = self.resolve(selector)?;
        Ok(self.documents.remove(index))
    }

    /// Finds a document ingested from identical content with the same
    /// title, if one exists (used to avoid duplicate ingests).
    pub fn find_same(&self, title: &str, original_content: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|d| d.title == title && d.original_content() == original_content)
    }

    fn resolve(&self, selector: &str) -> Result<usize> {
        if selector.is_empty() {
            bail!("Empty document selector");
        }

        // Exact id wins outright, then a unique exact title.
        if let Some(index) = self.documents.iter().position(|d| d.id == selector) {
            return Ok(index);
        }
        let exact: Vec<usize> = self.indices_where(|d| d.title == selector);
        if let [index] = exact.as_slice() {
            return Ok(*index);
        }

        let lower = selector.to_lowercase();
        let matches = if exact.is_empty() {
            self.indices_where(|d| {
                d.id.starts_with(selector) || d.title.to_lowercase().starts_with(&lower)
            })
        } else {
            exact
        };

        match matches.as_slice() {
            [index] => Ok(*index),
            [] => bail!(
                "No document matches '{selector}'.\n\n\
                 Run 'folio' to list the library."
            ),
            many => {
                let candidates: Vec<String> = many
                    .iter()
                    .map(|&i| format!("  {}  {}", self.documents[i].id, self.documents[i].title))
                    .collect();
                bail!(
                    "'{selector}' matches more than one document:\n\n{}\n\n\
                     Use the id to disambiguate.",
                    candidates.join("\n")
                )
            }
        }
    }

    fn indices_where(&self, predicate: impl Fn(&Document) -> bool) -> Vec<usize> {
        self.documents
            .iter()
            .enumerate()
            .filter(|(_, d)| predicate(d))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created in the same directory as the target so the
/// rename stays on one filesystem. Parent directories are created as
/// needed.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
