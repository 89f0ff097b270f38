//! Corpus word representation
//!
//! A Word stores a fixed-length candidate exactly as it appears in the corpus,
//! along with a letter index for fast "contains" tests.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of letters in every corpus word
pub const WORD_LENGTH: usize = 5;

/// A fixed-length candidate word with a letter index
///
/// The text is kept verbatim. Filter input is lowercased by the criteria store,
/// so corpus entries are assumed to be lowercase upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    Whitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::Whitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a corpus entry
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The entry is not exactly `WORD_LENGTH` characters long
    /// - The entry contains whitespace
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("ab cd").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let mut chars = [' '; WORD_LENGTH];
        let mut len = 0;
        for ch in text.chars() {
            if len < WORD_LENGTH {
                chars[len] = ch;
            }
            len += 1;
        }

        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if chars.iter().any(|c| c.is_whitespace()) {
            return Err(WordError::Whitespace);
        }

        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a 0-based index
    ///
    /// # Panics
    /// Panics if index >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
