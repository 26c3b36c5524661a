//! Word-budget pagination with sentence-boundary snapping.
//!
//! Pages are greedy chunks of up to a fixed number of words. A non-final
//! chunk that would stop mid-sentence is shortened to end at its last
//! sentence boundary instead, provided that boundary sits late enough in
//! the chunk; the words after the boundary roll into the next page. Cuts
//! are always word-granular, so joining all pages back together yields the
//! input's word sequence exactly.

use crate::document::segment::words;

/// Default number of words per page.
pub const DEFAULT_WORDS_PER_PAGE: usize = 400;

/// The single page produced for empty or whitespace-only content.
pub const NO_CONTENT_PAGE: &str = "No content available";

/// Characters that end a sentence.
const SENTENCE_ENDINGS: [char; 3] = ['.', '!', '?'];

/// A sentence boundary only triggers a page break when the ending
/// punctuation sits at or after this fraction of the chunk's character
/// length, expressed in tenths.
const SNAP_THRESHOLD_TENTHS: usize = 7;

/// Splits `content` into pages of at most `words_per_page` words.
///
/// Empty or whitespace-only content yields exactly one sentinel page
/// ([`NO_CONTENT_PAGE`]); the result is never empty. A `words_per_page`
/// of zero is treated as one.
pub fn paginate(content: &str, words_per_page: usize) -> Vec<String> {
    let words = words(content);
    if words.is_empty() {
        return vec![NO_CONTENT_PAGE.to_string()];
    }

    let per_page = words_per_page.max(1);
    let mut pages = Vec::with_capacity(words.len() / per_page + 1);
    let mut cursor = 0;

    while cursor < words.len() {
        let end = usize::min(cursor + per_page, words.len());
        let chunk = &words[cursor..end];

        let is_final = end == words.len();
        let consumed = if is_final || ends_sentence(chunk[chunk.len() - 1]) {
            chunk.len()
        } else {
            snap_point(chunk).unwrap_or(chunk.len())
        };

        pages.push(chunk[..consumed].join(" "));
        cursor += consumed;
    }

    pages
}

/// Whether a word ends with sentence-ending punctuation.
fn ends_sentence(word: &str) -> bool {
    word.ends_with(SENTENCE_ENDINGS)
}

/// Finds how many words of `chunk` to keep so the page ends at the last
/// sentence boundary, if that boundary passes the position threshold.
///
/// Only words that end with `.`, `!`, or `?` count as boundaries, so a
/// decimal point or an abbreviation mid-word never splits the chunk.
fn snap_point(chunk: &[&str]) -> Option<usize> {
    let keep = (1..chunk.len()).rev().find(|&i| ends_sentence(chunk[i - 1]))?;

    let char_len = |words: &[&str]| -> usize {
        let chars: usize = words.iter().map(|w| w.chars().count()).sum();
        chars + words.len().saturating_sub(1) // single-space separators
    };

    // Position of the ending punctuation character within the joined chunk.
    let boundary_pos = char_len(&chunk[..keep]) - 1;
    let total = char_len(chunk);

    (boundary_pos * 10 >= total * SNAP_THRESHOLD_TENTHS).then_some(keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(pages: &[String]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|p| p.split_whitespace().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_exact_chunks_without_punctuation() {
        let pages = paginate("one two three four five", 2);
        assert_eq!(pages, vec!["one two", "three four", "five"]);
    }

    #[test]
    fn test_empty_content_yields_sentinel_page() {
        assert_eq!(paginate("", 400), vec![NO_CONTENT_PAGE.to_string()]);
        assert_eq!(paginate("   \n\t  ", 400), vec![NO_CONTENT_PAGE.to_string()]);
    }

    #[test]
    fn test_never_returns_zero_pages() {
        assert!(!paginate("", 400).is_empty());
        assert!(!paginate("word", 400).is_empty());
    }

    #[test]
    fn test_single_page_when_content_fits() {
        let pages = paginate("a short piece of text", 400);
        assert_eq!(pages, vec!["a short piece of text"]);
    }

    #[test]
    fn test_snaps_to_late_sentence_boundary() {
        // The boundary after "done." sits past 70% of the chunk, so the
        // first page ends there and "x" rolls into the next page.
        let pages = paginate("a b c d e f done. x y z", 8);
        assert_eq!(pages, vec!["a b c d e f done.", "x y z"]);
    }

    #[test]
    fn test_ignores_early_sentence_boundary() {
        // "aa." ends a sentence but sits at the very start of the chunk,
        // well before the threshold, so the full chunk stands.
        let pages = paginate("aa. b c d e f g h i j k", 10);
        assert_eq!(pages, vec!["aa. b c d e f g h i j", "k"]);
    }

    #[test]
    fn test_chunk_already_ending_with_punctuation_is_kept() {
        let pages = paginate("one two three. four five six.", 3);
        assert_eq!(pages, vec!["one two three.", "four five six."]);
    }

    #[test]
    fn test_word_sequence_is_preserved() {
        let text = "The quick brown fox jumps over the lazy dog. It was a dark \
                    and stormy night! Where did everyone go? Nobody knew. The \
                    end came quickly after that, without any warning at all";
        for per_page in [1, 2, 3, 5, 7, 400] {
            let pages = paginate(text, per_page);
            assert_eq!(
                flatten(&pages),
                text.split_whitespace().map(str::to_string).collect::<Vec<_>>(),
                "words lost or duplicated at {per_page} words per page"
            );
        }
    }

    #[test]
    fn test_word_count_is_preserved() {
        let text = "alpha beta gamma. delta epsilon zeta eta theta. iota kappa";
        let pages = paginate(text, 4);
        let total: usize = pages.iter().map(|p| p.split_whitespace().count()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_non_final_pages_end_with_sentence_punctuation() {
        // Sentences of ~5 words each; every non-final page should snap to
        // a sentence boundary.
        let sentence = "the quick brown fox jumped.";
        let text = vec![sentence; 40].join(" ");
        let pages = paginate(&text, 23);
        assert!(pages.len() > 1);
        for page in &pages[..pages.len() - 1] {
            assert!(
                page.ends_with(['.', '!', '?']),
                "non-final page did not end a sentence: {page:?}"
            );
        }
    }

    #[test]
    fn test_decimal_point_does_not_split_a_word() {
        // "3.14159" must never be cut after its internal dot.
        let pages = paginate("the constant pi is about 3.14159 give or take", 7);
        for page in &pages {
            for word in page.split_whitespace() {
                assert_ne!(word, "3.");
                assert_ne!(word, "14159");
            }
        }
    }

    #[test]
    fn test_zero_words_per_page_treated_as_one() {
        let pages = paginate("one two three", 0);
        assert_eq!(pages, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_default_words_per_page() {
        assert_eq!(DEFAULT_WORDS_PER_PAGE, 400);
    }
}
