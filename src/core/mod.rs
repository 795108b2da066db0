//! Core data structures for the word store
//!
//! This module contains the prefix index and the ranked store built on top of it.
//! Nothing here performs I/O.

mod index;
mod store;

pub use index::PrefixIndex;
pub use store::{RankedWordStore, UNKNOWN_RANK};
