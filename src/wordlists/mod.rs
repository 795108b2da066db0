//! Word sources for the store
//!
//! Provides the embedded default dictionary and loaders for external word files.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{LoadError, WordSource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RankedWordStore;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_non_empty() {
        assert!(WORDS_COUNT > 0);
        for &word in WORDS {
            assert!(!word.is_empty(), "Embedded list contains a blank entry");
        }
    }

    #[test]
    fn embedded_words_are_distinct() {
        let mut store = RankedWordStore::new();
        assert_eq!(store.load(WORDS), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_cover_demo_prefix() {
        let mut store = RankedWordStore::new();
        store.load(WORDS);
        for word in ["he", "hello", "help", "hem"] {
            assert!(store.contains(word), "Missing '{word}'");
        }
    }
}
