//! Ranked word store
//!
//! Wraps a [`PrefixIndex`] with a popularity counter per word. Lookups and suggestion listings
//! count as votes, and suggestions are ordered by those votes.

use super::PrefixIndex;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use tracing::{debug, trace};

/// Rank reported by [`RankedWordStore::get_rank`] for words that were never inserted
pub const UNKNOWN_RANK: i64 = -1;

/// A prefix index presented as a ranked dictionary
///
/// Every stored word has exactly one rank entry. Ranks start at 0 and only grow.
///
/// # Examples
/// ```
/// use word_rank::core::RankedWordStore;
///
/// let mut store = RankedWordStore::new();
/// store.load(["he", "hello", "help", "hem"]);
///
/// assert_eq!(store.autocomplete("he"), ["he", "hello", "help", "hem"]);
///
/// store.search("hello");
/// store.search("hello");
/// assert_eq!(store.get_rank("hello"), 3);
///
/// assert_eq!(store.autocomplete("he"), ["hello", "he", "help", "hem"]);
/// assert_eq!(store.get_rank("unknown"), -1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RankedWordStore {
    index: PrefixIndex,
    ranks: FxHashMap<String, u32>,
}

impl RankedWordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load words, skipping empty and already known entries
    ///
    /// Existing ranks are never reset, so loading the same source twice only adds what is new.
    ///
    /// Returns the number of words added.
    pub fn load<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = words
            .into_iter()
            .filter(|word| self.insert(word.as_ref()))
            .count();

        debug!(added, total = self.len(), "loaded words");
        added
    }

    /// Insert a single word with rank 0
    ///
    /// Empty words and words already stored are skipped. Returns `true` if the word was added.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || self.ranks.contains_key(word) {
            return false;
        }

        self.index.insert(word);
        self.ranks.insert(word.to_owned(), 0);
        true
    }

    /// Look up a word, counting a successful lookup as one vote
    ///
    /// Unknown words return `false` and change nothing.
    pub fn search(&mut self, word: &str) -> bool {
        if !self.index.contains(word) {
            return false;
        }

        self.bump(word);
        true
    }

    /// Suggest every stored word starting with `prefix`
    ///
    /// Each returned word gains one vote before ordering. Results are sorted by rank descending,
    /// then by the word itself ascending.
    pub fn autocomplete(&mut self, prefix: &str) -> Vec<String> {
        let mut matches = self.index.collect_with_prefix(prefix);

        for word in &matches {
            self.bump(word);
        }

        matches.sort_unstable_by(|a, b| {
            let by_rank = |word: &String| Reverse(self.ranks.get(word).copied());
            by_rank(a).cmp(&by_rank(b)).then_with(|| a.cmp(b))
        });
        trace!(prefix, count = matches.len(), "autocomplete");
        matches
    }

    /// Add one vote to a known word; unknown words are ignored
    pub fn increment_rank(&mut self, word: &str) {
        self.bump(word);
    }

    /// Current rank of `word`, or `None` if it was never inserted
    #[must_use]
    pub fn rank(&self, word: &str) -> Option<u32> {
        self.ranks.get(word).copied()
    }

    /// Current rank of `word`, or [`UNKNOWN_RANK`] if it was never inserted
    #[must_use]
    pub fn get_rank(&self, word: &str) -> i64 {
        self.rank(word).map_or(UNKNOWN_RANK, i64::from)
    }

    /// Membership check that does not count as a vote
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// Iterate over every stored word in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.ranks.keys().map(String::as_str)
    }

    /// Number of stored words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the store holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    fn bump(&mut self, word: &str) {
        if let Some(rank) = self.ranks.get_mut(word) {
            *rank = rank.saturating_add(1);
            trace!(word, rank = *rank, "rank incremented");
        }
    }
}
