//! Command implementations

pub mod benchmark;
pub mod query;
pub mod session;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_prefixes};
pub use query::{
    CompletionResult, RankResult, SearchResult, bump_word, complete_prefix, rank_of, search_word,
};
pub use session::{Outcome, SessionCommand, execute, run_session};
