//! Deterministic, offline document analysis.
//!
//! This is both the `analyze` capability's local fallback and the source
//! of the surface statistics that AI-backed analysis merges into its
//! result. Everything here is pure text processing; it cannot fail.

use std::collections::HashMap;

use crate::document::segment;
use crate::enrich::types::{Analysis, Difficulty, DocumentStats, LOCAL_SOURCE};

/// Words ignored when extracting topics from document text.
const STOP_WORDS: [&str; 40] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "shall", "this", "that", "these", "those",
    "it",
];

/// Smaller ignore list for AI response text, which is prose about the
/// document rather than the document itself.
const AI_STOP_WORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Sentences containing one of these words are promoted to key points.
const KEY_POINT_MARKERS: [&str; 6] = [
    "important",
    "key",
    "main",
    "significant",
    "conclusion",
    "result",
];

/// Reading speed used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Computes surface statistics for a piece of text.
pub fn stats(content: &str) -> DocumentStats {
    let words = segment::words(content);
    let sentences = segment::sentences(content);

    DocumentStats {
        words: words.len(),
        sentences: sentences.len(),
        paragraphs: segment::paragraphs(content).len(),
        reading_minutes: words.len().div_ceil(WORDS_PER_MINUTE),
        difficulty: difficulty(&words, &sentences),
    }
}

/// Builds a complete analysis without any remote provider.
pub fn local(title: &str, content: &str) -> Analysis {
    Analysis {
        title: title.to_string(),
        stats: stats(content),
        summary: local_summary(content),
        key_points: local_key_points(content),
        main_topics: frequent_terms(content, 3, 8, &STOP_WORDS),
        provider: LOCAL_SOURCE.to_string(),
    }
}

/// Merges an AI response with locally computed statistics.
///
/// The summary is the response text capped at 500 characters; key points
/// come from its bulleted or numbered lines; topics from its frequent
/// words.
pub fn from_ai_text(title: &str, content: &str, ai_text: &str, provider: &str) -> Analysis {
    Analysis {
        title: title.to_string(),
        stats: stats(content),
        summary: ai_summary(ai_text),
        key_points: ai_key_points(ai_text),
        main_topics: frequent_terms(ai_text, 4, 6, &AI_STOP_WORDS),
        provider: provider.to_string(),
    }
}

fn difficulty(words: &[&str], sentences: &[&str]) -> Difficulty {
    if words.is_empty() || sentences.is_empty() {
        return Difficulty::Beginner;
    }

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_len = total_chars as f64 / words.len() as f64;
    let avg_sentence_len = words.len() as f64 / sentences.len() as f64;

    if avg_word_len > 6.0 && avg_sentence_len > 20.0 {
        Difficulty::Advanced
    } else if avg_word_len > 5.0 && avg_sentence_len > 15.0 {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    }
}

/// First, middle, and last substantial sentences of the text.
fn local_summary(content: &str) -> String {
    let sentences: Vec<&str> = segment::sentences(content)
        .into_iter()
        .filter(|s| s.chars().count() > 30)
        .collect();

    if sentences.is_empty() {
        return "This document contains limited analyzable content.".to_string();
    }

    let mut summary = String::new();
    summary.push_str(sentences[0]);
    summary.push_str(". ");

    if sentences.len() > 5 {
        summary.push_str(sentences[sentences.len() / 2]);
        summary.push_str(". ");
    }

    if sentences.len() > 2 {
        summary.push_str(sentences[sentences.len() - 1]);
        summary.push('.');
    }

    summary.trim_end().to_string()
}

fn local_key_points(content: &str) -> Vec<String> {
    let sentences: Vec<&str> = segment::sentences(content)
        .into_iter()
        .filter(|s| s.chars().count() > 50)
        .collect();

    let marked: Vec<String> = sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            let length = s.chars().count();
            KEY_POINT_MARKERS.iter().any(|m| lower.contains(m)) || (length > 80 && length < 200)
        })
        .take(5)
        .map(|s| (*s).to_string())
        .collect();

    if marked.is_empty() {
        sentences.iter().take(3).map(|s| (*s).to_string()).collect()
    } else {
        marked
    }
}

/// Most frequent terms longer than `min_len` characters, ties broken by
/// first appearance.
fn frequent_terms(text: &str, min_len: usize, limit: usize, stop_words: &[&str]) -> Vec<String> {
    let mut freq: HashMap<String, (usize, usize)> = HashMap::new();
    let mut next_seen = 0usize;

    for raw in text.to_lowercase().split_whitespace() {
        let term: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if term.chars().count() <= min_len || stop_words.contains(&term.as_str()) {
            continue;
        }

        next_seen += 1;
        let order = next_seen;
        freq.entry(term)
            .and_modify(|e| e.0 += 1)
            .or_insert((1, order));
    }

    let mut terms: Vec<(String, (usize, usize))> = freq.into_iter().collect();
    terms.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
    terms.into_iter().take(limit).map(|(term, _)| term).collect()
}

fn ai_summary(ai_text: &str) -> String {
    const MAX_CHARS: usize = 500;

    if ai_text.chars().count() <= MAX_CHARS {
        ai_text.to_string()
    } else {
        let cut: String = ai_text.chars().take(MAX_CHARS).collect();
        format!("{cut}...")
    }
}

/// Bulleted or numbered lines of the AI response, markers stripped.
fn ai_key_points(ai_text: &str) -> Vec<String> {
    let points: Vec<String> = ai_text
        .lines()
        .filter_map(strip_list_marker)
        .take(5)
        .map(str::to_string)
        .collect();

    if points.is_empty() {
        vec!["AI analysis provided comprehensive insights".to_string()]
    } else {
        points
    }
}

/// Strips a leading `- `, `• `, `* `, or `1. ` style marker, requiring
/// whitespace after the marker.
fn strip_list_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix(['-', '•', '*']) {
        let stripped = rest.trim_start();
        if stripped.len() < rest.len() && !stripped.is_empty() {
            return Some(stripped);
        }
        return None;
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0
        && let Some(rest) = line[digits..].strip_prefix('.')
    {
        let stripped = rest.trim_start();
        if stripped.len() < rest.len() && !stripped.is_empty() {
            return Some(stripped);
        }
    }
    None
}
