//! One-shot store queries
//!
//! Each function runs a single store operation and packages the outcome for display.

use crate::core::RankedWordStore;

/// Result of looking up a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub word: String,
    pub found: bool,
    pub rank: i64,
}

/// Result of listing suggestions for a prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub prefix: String,
    /// Suggestions in display order, each with its rank after this listing
    pub suggestions: Vec<(String, u32)>,
}

/// Result of a rank lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankResult {
    pub word: String,
    pub rank: i64,
}

/// Search for a word, voting for it when found
pub fn search_word(store: &mut RankedWordStore, word: &str) -> SearchResult {
    let found = store.search(word);

    SearchResult {
        word: word.to_string(),
        found,
        rank: store.get_rank(word),
    }
}

/// List ranked suggestions for a prefix, optionally keeping only the first `limit`
///
/// Every matching word is voted for, including those cut by `limit`.
pub fn complete_prefix(
    store: &mut RankedWordStore,
    prefix: &str,
    limit: Option<usize>,
) -> CompletionResult {
    let words = store.autocomplete(prefix);

    let suggestions = words
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|word| {
            let rank = store.rank(&word).unwrap_or_default();
            (word, rank)
        })
        .collect();

    CompletionResult {
        prefix: prefix.to_string(),
        suggestions,
    }
}

/// Report the current rank of a word without voting for it
#[must_use]
pub fn rank_of(store: &RankedWordStore, word: &str) -> RankResult {
    RankResult {
        word: word.to_string(),
        rank: store.get_rank(word),
    }
}

/// Manually vote for a word and report its rank afterwards
pub fn bump_word(store: &mut RankedWordStore, word: &str) -> RankResult {
    store.increment_rank(word);
    rank_of(store, word)
}
