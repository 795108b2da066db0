//! Word list loading utilities
//!
//! Reads line-oriented word sources. Each line is one candidate word, used exactly as written
//! apart from its line terminator. Blank lines are passed through; the store skips them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Load candidate words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_rank::core::RankedWordStore;
/// use word_rank::wordlists::loader::load_from_file;
///
/// let mut store = RankedWordStore::new();
/// store.load(load_from_file("data/words.txt").unwrap());
/// println!("Loaded {} words", store.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let lines = lines_from_reader(BufReader::new(File::open(path)?))?;

    debug!(path = %path.display(), lines = lines.len(), "read word file");
    Ok(lines)
}

/// Read every line from a buffered reader
///
/// Both `\n` and `\r\n` terminators are stripped; nothing else is trimmed. Lines that are not
/// valid UTF-8 are skipped with a warning so the rest of the source still loads.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
///
/// # Examples
/// ```
/// use word_rank::wordlists::loader::lines_from_reader;
///
/// let lines = lines_from_reader("he\r\nhello\n\nhelp".as_bytes()).unwrap();
/// assert_eq!(lines, ["he", "hello", "", "help"]);
/// ```
pub fn lines_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();

    for (number, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        match String::from_utf8(raw) {
            Ok(line) => lines.push(line),
            Err(e) => warn!(line = number + 1, error = %e.utf8_error(), "skipping undecodable line"),
        }
    }

    Ok(lines)
}

/// Copy an embedded string slice into owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&word| word.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lines_keep_inner_whitespace() {
        let lines = lines_from_reader(" padded \nTab\tbed\n".as_bytes()).unwrap();
        assert_eq!(lines, [" padded ", "Tab\tbed"]);
    }

    #[test]
    fn lines_strip_crlf() {
        let lines = lines_from_reader("one\r\ntwo\r\n".as_bytes()).unwrap();
        assert_eq!(lines, ["one", "two"]);
    }

    #[test]
    fn lines_keep_blank_entries() {
        let lines = lines_from_reader("a\n\nb\n".as_bytes()).unwrap();
        assert_eq!(lines, ["a", "", "b"]);
    }

    #[test]
    fn lines_from_empty_reader() {
        let lines = lines_from_reader(io::empty()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn lines_skip_invalid_utf8() {
        let bytes: &[u8] = b"hello\nhelp\ncaf\xe9\nhem\r\n";
        let lines = lines_from_reader(bytes).unwrap();
        assert_eq!(lines, ["hello", "help", "hem"]);
    }

    #[test]
    fn lines_without_trailing_newline() {
        let lines = lines_from_reader("last".as_bytes()).unwrap();
        assert_eq!(lines, ["last"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("definitely/not/here/words.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("word_rank_loader_{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "he").unwrap();
            writeln!(file, "hello").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "help").unwrap();
        }

        let lines = load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(lines, ["he", "hello", "", "help"]);
    }

    #[test]
    fn load_from_file_keeps_good_lines_around_bad_one() {
        let path =
            std::env::temp_dir().join(format!("word_rank_loader_bad_{}.txt", std::process::id()));
        std::fs::write(&path, b"hello\nhelp\ncaf\xe9\n").unwrap();

        let lines = load_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(lines.unwrap(), ["hello", "help"]);
    }

    #[test]
    fn words_from_slice_copies_in_order() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }
}
