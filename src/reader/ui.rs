//! Reader mode UI components.

use crate::document::Document;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(document: &Document) {
    println!(
        "{} {} - {}",
        Style::header("folio"),
        Style::secondary(format!("v{VERSION}")),
        Style::title(&document.title)
    );
    println!(
        "{}",
        Style::hint("Enter turns the page; /help lists commands.")
    );
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}     {}",
        Style::command("/next"),
        Style::secondary("Turn to the next page (or just press Enter)")
    );
    println!(
        "  {}     {}",
        Style::command("/prev"),
        Style::secondary("Turn back one page")
    );
    println!(
        "  {}     {}",
        Style::command("/goto"),
        Style::secondary("Jump to a page number")
    );
    println!(
        "  {}     {}",
        Style::command("/lang"),
        Style::secondary("Read in another language (source code restores the original)")
    );
    println!(
        "  {}   {}",
        Style::command("/define"),
        Style::secondary("Look up a word")
    );
    println!(
        "  {}   {}",
        Style::command("/search"),
        Style::secondary("Search the web for a topic")
    );
    println!(
        "  {}  {}",
        Style::command("/analyze"),
        Style::secondary("Analyze this document")
    );
    println!(
        "  {}     {}",
        Style::command("/info"),
        Style::secondary("Show document details")
    );
    println!(
        "  {}     {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}     {}",
        Style::command("/quit"),
        Style::secondary("Close the reader")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
