//! Terminal rendering for documents and enrichment results.
//!
//! Primary content (pages, search results, definitions, analyses) goes
//! to stdout so it can be piped; adornment uses [`Style`]. Both the
//! reader session and the one-shot CLI commands print through here.

use crate::document::Document;
use crate::enrich::{Analysis, Definition, SearchResults};
use crate::language::language_name;
use crate::ui::Style;

pub fn print_page(document: &Document) {
    println!();
    println!(
        "{}  {}",
        Style::title(&document.title),
        Style::secondary(format!(
            "Page {} of {}",
            document.current_page() + 1,
            document.page_count()
        ))
    );
    println!();
    println!("{}", document.current_page_text());
    println!();
}

pub fn print_library(documents: &[Document]) {
    if documents.is_empty() {
        println!("Library is empty. Add a document with 'folio add <file>'.");
        return;
    }

    println!("{}", Style::header("Library"));
    for document in documents {
        println!(
            "  {}  {}  {}  {}",
            Style::value(&document.id),
            Style::code(document.language()),
            Style::secondary(format!(
                "page {}/{}",
                document.current_page() + 1,
                document.page_count()
            )),
            Style::title(&document.title),
        );
    }
}

pub fn print_document_info(document: &Document) {
    println!("{}", Style::header(&document.title));
    println!(
        "  {}        {}",
        Style::label("id"),
        Style::value(&document.id)
    );
    println!(
        "  {}      {}",
        Style::label("type"),
        Style::value(document.content_type.as_str())
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        language_label(document.language())
    );
    if !document.is_original() {
        println!(
            "  {}  {}",
            Style::label("original"),
            language_label(&document.source_language)
        );
    }
    println!(
        "  {}     {}",
        Style::label("pages"),
        Style::value(document.page_count())
    );
    println!(
        "  {}     {}",
        Style::label("words"),
        Style::value(document.word_count())
    );
    println!(
        "  {}     {}",
        Style::label("added"),
        Style::secondary(document.uploaded_at.format("%Y-%m-%d %H:%M"))
    );
}

pub fn print_search_results(results: &SearchResults) {
    println!("{}", results.summary);
    println!();
    for (index, item) in results.items.iter().enumerate() {
        println!(
            "{}. {}  {}",
            index + 1,
            Style::title(&item.title),
            Style::attribution(format!("[{}]", item.source))
        );
        println!("   {}", item.snippet);
        println!("   {}", Style::secondary(&item.url));
        println!();
    }
}

pub fn print_definition(definition: &Definition) {
    println!(
        "{}  {}",
        Style::header(&definition.word),
        Style::attribution(&definition.source)
    );
    println!("{}", definition.definition);
    if let Some(url) = &definition.url {
        println!("{}", Style::secondary(url));
    }
}

pub fn print_analysis(analysis: &Analysis) {
    println!(
        "{}  {}",
        Style::header(format!("Analysis of {}", analysis.title)),
        Style::attribution(format!("via {}", analysis.provider))
    );
    println!();
    let stats = &analysis.stats;
    println!(
        "  {} words, {} sentences, {} paragraphs",
        stats.words, stats.sentences, stats.paragraphs
    );
    println!(
        "  {} min read, {} level",
        stats.reading_minutes,
        stats.difficulty.as_str()
    );
    println!();
    println!("{}", Style::header("Summary"));
    println!("  {}", analysis.summary);
    if !analysis.key_points.is_empty() {
        println!();
        println!("{}", Style::header("Key points"));
        for point in &analysis.key_points {
            println!("  - {point}");
        }
    }
    if !analysis.main_topics.is_empty() {
        println!();
        println!("{}", Style::header("Main topics"));
        println!("  {}", analysis.main_topics.join(", "));
    }
}

fn language_label(code: &str) -> String {
    language_name(code).map_or_else(
        || Style::code(code),
        |name| format!("{} {}", name, Style::code(format!("({code})"))),
    )
}
