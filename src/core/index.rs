//! Prefix index
//!
//! A trie keyed by characters. Each node exclusively owns its children, so the whole tree is
//! dropped together with the index.

use rustc_hash::FxHashMap;

/// A single node in the prefix tree
#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    is_terminal: bool,
}

/// A set of words stored as character paths from a shared root
///
/// Supports insertion, exact membership and collection of every word below a prefix.
#[derive(Debug, Default, Clone)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl PrefixIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating any missing nodes along its path
    ///
    /// Inserting a word that is already stored leaves the index unchanged. The empty string is a
    /// valid word and marks the root itself.
    ///
    /// Returns `true` if the word was not stored before.
    ///
    /// # Examples
    /// ```
    /// use word_rank::core::PrefixIndex;
    ///
    /// let mut index = PrefixIndex::new();
    /// assert!(index.insert("hello"));
    /// assert!(!index.insert("hello"));
    /// assert!(index.contains("hello"));
    /// assert!(!index.contains("hell"));
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        let node = word
            .chars()
            .fold(&mut self.root, |node, ch| node.children.entry(ch).or_default());

        if node.is_terminal {
            return false;
        }
        node.is_terminal = true;
        self.len += 1;
        true
    }

    /// Check whether `word` is stored as a complete word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(|node| node.is_terminal)
    }

    /// Check whether any stored word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    /// Collect every stored word that starts with `prefix`
    ///
    /// Includes `prefix` itself when it is a stored word. Order is unspecified; callers sort.
    ///
    /// # Examples
    /// ```
    /// use word_rank::core::PrefixIndex;
    ///
    /// let mut index = PrefixIndex::new();
    /// for word in ["he", "hello", "help", "hi"] {
    ///     index.insert(word);
    /// }
    ///
    /// let mut words = index.collect_with_prefix("he");
    /// words.sort();
    /// assert_eq!(words, ["he", "hello", "help"]);
    /// assert!(index.collect_with_prefix("xyz").is_empty());
    /// ```
    #[must_use]
    pub fn collect_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.node(prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut buffer = String::from(prefix);
        Self::collect(start, &mut buffer, &mut results);
        results
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been stored
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }

    // Pre-order walk; `buffer` always holds the path from the root to `node`.
    fn collect(node: &TrieNode, buffer: &mut String, results: &mut Vec<String>) {
        if node.is_terminal {
            results.push(buffer.clone());
        }

        for (&ch, child) in &node.children {
            buffer.push(ch);
            Self::collect(child, buffer, results);
            buffer.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> PrefixIndex {
        let mut index = PrefixIndex::new();
        for word in words {
            index.insert(word);
        }
        index
    }

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn new_index_is_empty() {
        let index = PrefixIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(!index.contains(""));
        assert!(index.collect_with_prefix("").is_empty());
    }

    #[test]
    fn insert_then_contains() {
        let index = index_of(&["cat", "car", "cart"]);
        assert!(index.contains("cat"));
        assert!(index.contains("car"));
        assert!(index.contains("cart"));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn prefix_of_word_is_not_contained() {
        let index = index_of(&["cart"]);
        assert!(!index.contains("car"));
        assert!(!index.contains("c"));
        assert!(!index.contains("carts"));
        assert!(!index.contains("dog"));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut index = index_of(&["hello"]);
        assert!(!index.insert("hello"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.collect_with_prefix("h"), vec!["hello".to_string()]);
    }

    #[test]
    fn shorter_word_after_longer_word() {
        let mut index = index_of(&["hello"]);
        assert!(index.insert("he"));
        assert!(index.contains("he"));
        assert!(index.contains("hello"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn empty_word_marks_root() {
        let mut index = PrefixIndex::new();
        assert!(index.insert(""));
        assert!(index.contains(""));
        assert_eq!(index.len(), 1);
        assert_eq!(index.collect_with_prefix(""), vec![String::new()]);
    }

    #[test]
    fn collect_includes_prefix_when_terminal() {
        let index = index_of(&["he", "hello", "help", "hem", "hi"]);
        assert_eq!(
            sorted(index.collect_with_prefix("he")),
            ["he", "hello", "help", "hem"]
        );
    }

    #[test]
    fn collect_excludes_prefix_when_not_terminal() {
        let index = index_of(&["hello", "help"]);
        assert_eq!(sorted(index.collect_with_prefix("hel")), ["hello", "help"]);
    }

    #[test]
    fn collect_missing_prefix_is_empty() {
        let index = index_of(&["hello"]);
        assert!(index.collect_with_prefix("xyz").is_empty());
        assert!(index.collect_with_prefix("helloo").is_empty());
    }

    #[test]
    fn collect_empty_prefix_returns_everything() {
        let words = ["a", "ab", "b", "ba", "bab"];
        let index = index_of(&words);
        assert_eq!(sorted(index.collect_with_prefix("")), words);
    }

    #[test]
    fn collect_has_no_duplicates() {
        let index = index_of(&["dup", "dup", "dupe", "dupe"]);
        assert_eq!(sorted(index.collect_with_prefix("du")), ["dup", "dupe"]);
    }

    #[test]
    fn has_prefix_follows_paths() {
        let index = index_of(&["hello"]);
        assert!(index.has_prefix(""));
        assert!(index.has_prefix("hel"));
        assert!(index.has_prefix("hello"));
        assert!(!index.has_prefix("help"));
    }

    #[test]
    fn multibyte_characters_round_trip() {
        let index = index_of(&["café", "cafés", "naïve"]);
        assert!(index.contains("café"));
        assert_eq!(sorted(index.collect_with_prefix("caf")), ["café", "cafés"]);
        assert_eq!(index.collect_with_prefix("naï"), vec!["naïve".to_string()]);
    }
}
