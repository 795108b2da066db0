//! Word Rank
//!
//! A prefix-indexed word store with exact lookup, prefix suggestions, and popularity ranking.
//! Every successful lookup and every suggestion listing counts as a vote, and suggestions are
//! ordered by those votes.
//!
//! # Quick Start
//!
//! ```rust
//! use word_rank::core::RankedWordStore;
//!
//! let mut store = RankedWordStore::new();
//! store.load(["car", "cart", "care", "dog"]);
//!
//! assert!(store.search("cart"));
//! assert_eq!(store.autocomplete("car"), ["cart", "car", "care"]);
//! assert_eq!(store.get_rank("cart"), 2);
//! ```

// Core data structures
pub mod core;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
