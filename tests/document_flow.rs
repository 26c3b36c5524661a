#![allow(clippy::unwrap_used)]
//! Document flow contract tests.
//!
//! These exercise the path the CLI takes: ingest a file from disk,
//! page through it, swap in a translation, and reload everything from
//! the library file.

use std::fs;

use folio_cli::document::{ContentType, Document, Library};
use tempfile::TempDir;

const ESSAY: &str = "\
The library at Alexandria was said to hold every scroll worth reading. \
Scholars came from across the sea to copy them. Most of what they copied \
is gone now, and what survives came down to us by accident as much as by \
care. A reader today holds more than Alexandria ever did.";

#[test]
fn test_file_ingest_to_library_flow() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("alexandria.txt");
    fs::write(&file, ESSAY).unwrap();

    let document = Document::from_file(&file, None, "en", 20).unwrap();
    assert_eq!(document.title, "alexandria");
    assert_eq!(document.content_type, ContentType::Text);
    assert!(document.page_count() > 1);
    assert!(document.word_count() > 40);

    let mut library = Library::open(dir.path().join("library.json")).unwrap();
    let id = library.add(document).id.clone();
    library.save().unwrap();

    let reloaded = Library::open(dir.path().join("library.json")).unwrap();
    let found = reloaded.find(&id).unwrap();
    assert_eq!(found.title, "alexandria");
    assert_eq!(found.content(), ESSAY);
    assert_eq!(found.current_page(), 0);
}

#[test]
fn test_markdown_files_are_typed_as_markdown() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.md");
    fs::write(&file, "# Heading\n\nSome *emphatic* prose.").unwrap();

    let document = Document::from_file(&file, None, "en", 400).unwrap();
    assert_eq!(document.content_type, ContentType::Markdown);
}

#[test]
fn test_explicit_title_overrides_file_stem() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("scan-0042.txt");
    fs::write(&file, "Recovered text.").unwrap();

    let document =
        Document::from_file(&file, Some("Letters, Vol. 2".to_string()), "en", 400).unwrap();
    assert_eq!(document.title, "Letters, Vol. 2");
}

#[test]
fn test_translation_swap_survives_reload() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("greeting.txt");
    fs::write(&file, "Good morning, old friend.").unwrap();

    let mut library = Library::open(dir.path().join("library.json")).unwrap();
    let id = library
        .add(Document::from_file(&file, None, "en", 400).unwrap())
        .id
        .clone();

    let document = library.find_mut(&id).unwrap();
    document.set_content("Bonjour, vieil ami.", "fr", 400);
    library.save().unwrap();

    let mut reloaded = Library::open(dir.path().join("library.json")).unwrap();
    let translated = reloaded.find_mut(&id).unwrap();
    assert_eq!(translated.language(), "fr");
    assert_eq!(translated.content(), "Bonjour, vieil ami.");
    assert!(!translated.is_original());
    assert_eq!(translated.original_content(), "Good morning, old friend.");

    translated.restore_original(400);
    assert!(translated.is_original());
    assert_eq!(translated.content(), "Good morning, old friend.");
}

#[test]
fn test_duplicate_ingest_is_detectable() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("essay.txt");
    fs::write(&file, ESSAY).unwrap();

    let mut library = Library::open(dir.path().join("library.json")).unwrap();
    let first = Document::from_file(&file, None, "en", 400).unwrap();
    library.add(first);

    let second = Document::from_file(&file, None, "en", 400).unwrap();
    assert!(
        library
            .find_same(&second.title, second.original_content())
            .is_some()
    );
}

#[test]
fn test_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("blank.txt");
    fs::write(&file, "   \n\n  ").unwrap();

    let err = Document::from_file(&file, None, "en", 400).unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_container_formats_are_rejected_with_guidance() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("paper.pdf");
    fs::write(&file, "%PDF-1.4 pretend").unwrap();

    let err = Document::from_file(&file, None, "en", 400).unwrap_err();
    assert!(err.to_string().contains("pdftotext"));
}
