//! Word list loading utilities
//!
//! Reads a corpus from the embedded list, a `{ "data": [...] }` JSON document
//! or a plain one-word-per-line file. Entries that are not valid words are
//! skipped.

use super::WORDS;
use crate::core::Word;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Error type for corpus loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read word list: {e}"),
            Self::Json(e) => write!(f, "word list is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Shape of a JSON word list
#[derive(Debug, Deserialize)]
struct WordListDocument {
    data: Vec<String>,
}

/// Where the corpus comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A `.json` document or a plain text file
    File(PathBuf),
}

impl WordSource {
    /// Interpret a `--wordlist` argument: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "embedded" {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Load the corpus
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<Word>, LoadError> {
        match self {
            Self::Embedded => Ok(words_from_slice(WORDS)),
            Self::File(path) => load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the corpus on a background thread
///
/// The receiver yields exactly one result; poll it with `try_recv` from the
/// host loop.
#[must_use]
pub fn spawn_load(source: WordSource) -> Receiver<Result<Vec<Word>, LoadError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        log::debug!("loading word list from {source}");
        // Receiver may be gone if the session was torn down first
        let _ = tx.send(source.load());
    });
    rx
}

/// Load words from a file, choosing the format by extension
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read, or if a `.json` file is
/// not a `{ "data": [...] }` document.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&content)
    } else {
        Ok(parse_lines(&content))
    }
}

/// Parse a `{ "data": [...] }` word list
///
/// # Errors
///
/// Returns `LoadError::Json` if the document does not have that shape.
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::parse_json;
///
/// let words = parse_json(r#"{ "data": ["apple", "amble", "nope"] }"#).unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn parse_json(content: &str) -> Result<Vec<Word>, LoadError> {
    let document: WordListDocument = serde_json::from_str(content)?;
    Ok(collect_words(document.data.iter().map(String::as_str)))
}

/// Parse one word per line, ignoring blank lines and surrounding whitespace
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Word> {
    collect_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_slice;
/// use wordle_filter::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_words(slice.iter().copied())
}

fn collect_words<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = entries
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("skipping word list entry {entry:?}: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_json_reads_data_array() {
        let words = parse_json(r#"{"data": ["apple", "amble", "angle"]}"#).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "amble", "angle"]);
    }

    #[test]
    fn parse_json_keeps_entries_verbatim() {
        let words = parse_json(r#"{"data": ["Apple"]}"#).unwrap();
        assert_eq!(words[0].text(), "Apple");
    }

    #[test]
    fn parse_json_rejects_wrong_shape() {
        assert!(matches!(
            parse_json(r#"["apple"]"#),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(parse_json("not json"), Err(LoadError::Json(_))));
    }

    #[test]
    fn parse_lines_trims_and_skips_blanks() {
        let words = parse_lines("apple\n\n  amble  \r\nangle\nx\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "amble", "angle"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/words.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
        assert_eq!(
            WordSource::from_arg("words.json"),
            WordSource::File(PathBuf::from("words.json"))
        );
    }

    #[test]
    fn spawn_load_delivers_embedded_corpus() {
        let rx = spawn_load(WordSource::Embedded);
        let words = rx.recv().unwrap().unwrap();
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn load_from_embedded_words() {
        let words = WordSource::Embedded.load().unwrap();
        assert_eq!(words.len(), WORDS.len());
    }
}
