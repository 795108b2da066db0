//! Word source selection
//!
//! Resolves the `--wordlist` setting to either the embedded dictionary or a file on disk.

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a word source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the store's words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The dictionary compiled into the binary
    Embedded,
    /// A line-oriented file, one word per line
    File(PathBuf),
}

impl WordSource {
    /// Resolve a source from its command line name
    ///
    /// `default` and `embedded` select the built-in list; anything else is a path.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Read every candidate word from the source
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Unreadable`] if a file source cannot be read.
    pub fn read(&self) -> Result<Vec<String>, LoadError> {
        match self {
            Self::Embedded => Ok(words_from_slice(WORDS)),
            Self::File(path) => load_from_file(path).map_err(|source| LoadError::Unreadable {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl std::fmt::Display for WordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded dictionary"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
