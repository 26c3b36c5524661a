//! Text segmentation primitives: words, sentences, and paragraphs.
//!
//! These splits are intentionally simple. A "word" is a maximal run of
//! non-whitespace; a "sentence" is whatever sits between runs of `.`, `!`,
//! and `?`; a "paragraph" is a run of non-blank lines. Abbreviations and
//! decimal points split like sentence ends, which is fine for the reading
//! statistics and summaries built on top.

/// Splits text into words on whitespace runs, dropping empties.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Counts words without collecting them.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits text into sentences on runs of `.`, `!`, `?`.
///
/// Each piece is trimmed; empty pieces are dropped. Callers that need
/// "real" sentences filter the result by a minimum length.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits text into paragraphs on blank-line runs.
///
/// A line containing only whitespace separates paragraphs; internal
/// newlines within a paragraph are preserved.
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0usize;
    let mut offset = 0usize;

    for line in text.split('\n') {
        let line_start = offset;
        let line_end = offset + line.len();
        offset = line_end + 1;

        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                paragraphs.push(text[s..end].trim());
            }
        } else {
            if start.is_none() {
                start = Some(line_start);
            }
            end = line_end;
        }
    }
    if let Some(s) = start {
        paragraphs.push(text[s..end].trim());
    }

    paragraphs.retain(|p| !p.is_empty());
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_basic() {
        assert_eq!(words("one two three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_words_collapses_whitespace() {
        assert_eq!(words("  one\t two \n three  "), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_words_empty() {
        assert!(words("").is_empty());
        assert!(words("   \n\t ").is_empty());
    }

    #[test]
    fn test_word_count_matches_words() {
        let text = "a quick   brown\nfox";
        assert_eq!(word_count(text), words(text).len());
    }

    #[test]
    fn test_sentences_basic() {
        assert_eq!(
            sentences("First. Second! Third?"),
            vec!["First", "Second", "Third"]
        );
    }

    #[test]
    fn test_sentences_punctuation_runs() {
        assert_eq!(sentences("Really?! Yes... sure."), vec!["Really", "Yes", "sure"]);
    }

    #[test]
    fn test_sentences_empty() {
        assert!(sentences("").is_empty());
        assert!(sentences("...!!!???").is_empty());
    }

    #[test]
    fn test_paragraphs_blank_line_split() {
        let text = "First paragraph\nstill first.\n\nSecond paragraph.";
        assert_eq!(
            paragraphs(text),
            vec!["First paragraph\nstill first.", "Second paragraph."]
        );
    }

    #[test]
    fn test_paragraphs_whitespace_only_separator() {
        let text = "One.\n   \t\nTwo.";
        assert_eq!(paragraphs(text), vec!["One.", "Two."]);
    }

    #[test]
    fn test_paragraphs_single() {
        assert_eq!(paragraphs("Just one paragraph."), vec!["Just one paragraph."]);
    }

    #[test]
    fn test_paragraphs_empty() {
        assert!(paragraphs("").is_empty());
        assert!(paragraphs("\n\n  \n").is_empty());
    }
}
