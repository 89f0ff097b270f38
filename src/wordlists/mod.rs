//! Word lists for filtering
//!
//! Provides the embedded default corpus and loaders for external lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // Filter input is lowercased, so the corpus must be too
        for &word in WORDS {
            assert_eq!(word.chars().count(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn contains_reference_words() {
        for word in ["apple", "amble", "angle", "crane"] {
            assert!(WORDS.contains(&word), "missing '{word}'");
        }
    }
}
