//! The document model: ingested text plus its pagination state.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::document::paginate::paginate;
use crate::document::segment::word_count;
use crate::input::read_file;

/// How an ingested file's content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Markdown,
}

impl ContentType {
    /// Picks a content type from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error for container formats that need external text
    /// extraction (PDF, DOCX, ...).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "txt" | "text" | "" => Ok(Self::Text),
            "pdf" | "docx" | "doc" => bail!(
                "Cannot ingest .{extension} files directly.\n\n\
                 Extract the text first (e.g. with pdftotext) and add the result."
            ),
            _ => Ok(Self::Text),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
        }
    }
}

/// A document in the library.
///
/// `original_content` is fixed at ingest and never changes. `content` is
/// the display text in `language`, and `pages` always corresponds to it:
/// the only way to change any of the three is [`Document::set_content`],
/// which replaces the text, repaginates, and clamps the reading position
/// in one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    content: String,
    original_content: String,
    pub content_type: ContentType,
    language: String,
    pub source_language: String,
    pages: Vec<String>,
    current_page: usize,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Creates a document from already-read text and paginates it.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        content_type: ContentType,
        language: impl Into<String>,
        words_per_page: usize,
    ) -> Self {
        let title = title.into();
        let content = content.into();
        let language = language.into();
        let uploaded_at = Utc::now();
        let pages = paginate(&content, words_per_page);

        Self {
            id: derive_id(&title, &content, uploaded_at),
            title,
            original_content: content.clone(),
            content,
            content_type,
            source_language: language.clone(),
            language,
            pages,
            current_page: 0,
            uploaded_at,
        }
    }

    /// Reads and ingests a file from disk.
    ///
    /// The title defaults to the file stem. Empty files are rejected, as
    /// are files above the input size cap.
    pub fn from_file(
        path: &Path,
        title: Option<String>,
        language: &str,
        words_per_page: usize,
    ) -> Result<Self> {
        let content_type = ContentType::from_path(path)?;
        let content = read_file(path)?;
        if content.trim().is_empty() {
            bail!("File is empty: {}", path.display());
        }

        let title = match title {
            Some(t) => t,
            None => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .context("Cannot derive a title from the file name; pass --title")?,
        };

        Ok(Self::new(title, content, content_type, language, words_per_page))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    /// The language the document is currently displayed in.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Zero-based index of the page being read.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Text of the page being read.
    pub fn current_page_text(&self) -> &str {
        // pages is never empty and current_page is kept in range
        self.pages
            .get(self.current_page)
            .map_or("", String::as_str)
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    /// Whether the document currently shows its ingested text.
    pub fn is_original(&self) -> bool {
        self.language == self.source_language
    }

    /// Replaces the display text, repaginates, and clamps the reading
    /// position, all in one step.
    ///
    /// The position clamp keeps `current_page` valid when the new text
    /// produces fewer pages: a reader on page 9 of 10 whose translation
    /// shrinks to 5 pages lands on page 4 (the last page), not past the
    /// end. `pages` is never empty, so the subtraction is safe.
    pub fn set_content(
        &mut self,
        content: impl Into<String>,
        language: impl Into<String>,
        words_per_page: usize,
    ) {
        self.content = content.into();
        self.language = language.into();
        self.pages = paginate(&self.content, words_per_page);
        self.current_page = self.current_page.min(self.pages.len() - 1);
    }

    /// Reverts to the ingested text and source language.
    pub fn restore_original(&mut self, words_per_page: usize) {
        let original = self.original_content.clone();
        let language = self.source_language.clone();
        self.set_content(original, language, words_per_page);
    }

    /// Moves to the given zero-based page. Returns `false` when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.pages.len() {
            self.current_page = index;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.current_page
            .checked_sub(1)
            .is_some_and(|prev| self.go_to(prev))
    }
}

/// Derives a short stable id from the document's identity at ingest.
fn derive_id(title: &str, content: &str, uploaded_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(content.as_bytes());
    hasher.update(uploaded_at.to_rfc3339().as_bytes());
    hex::encode(&hasher.finalize()[..6])
}
