//! Criteria-to-predicate compiler
//!
//! Compiles an ordered list of criteria into a single conjunctive [`Predicate`].
//! The predicate is a closed expression tree evaluated by [`Predicate::matches`];
//! letters taken from user input only ever appear as literal data in its leaves.
//!
//! # Compilation rules
//! Criteria with no letters are skipped. For the rest, in order:
//!
//! | scope    | kind      | contribution                                  |
//! |----------|-----------|-----------------------------------------------|
//! | position | `is`      | `word[p] == l`                                |
//! | position | `not`     | `word[p] != l`                                |
//! | position | `exclude` | AND over letters of `word[p] != l`            |
//! | position | `include` | OR over letters of `word[p] == l`             |
//! | all      | `exclude` | AND over letters of `!word.contains(l)`       |
//! | all      | `include` | AND over letters of `word.contains(l)`        |
//!
//! Global include is AND-of-contains while positional include is OR-of-equals.
//! All contributions are joined by AND. No contributions compiles to [`Predicate::Always`].

use crate::core::{Criterion, Kind, Scope, Word};
use std::fmt;

/// A boolean test over a corpus word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every word
    Always,
    /// Every sub-predicate matches
    And(Vec<Predicate>),
    /// At least one sub-predicate matches
    Or(Vec<Predicate>),
    /// The sub-predicate does not match
    Not(Box<Predicate>),
    /// The letter at a 0-based index equals `letter`
    LetterAt { index: usize, letter: char },
    /// The word contains `letter` anywhere
    Contains(char),
}

impl Predicate {
    /// Evaluate the predicate against a word
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Word;
    /// use wordle_filter::filter::Predicate;
    ///
    /// let starts_with_a = Predicate::LetterAt { index: 0, letter: 'a' };
    /// assert!(starts_with_a.matches(&Word::new("apple").unwrap()));
    /// assert!(!starts_with_a.matches(&Word::new("crane").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        match self {
            Self::Always => true,
            Self::And(terms) => terms.iter().all(|term| term.matches(word)),
            Self::Or(terms) => terms.iter().any(|term| term.matches(word)),
            Self::Not(inner) => !inner.matches(word),
            Self::LetterAt { index, letter } => word.char_at(*index) == *letter,
            Self::Contains(letter) => word.has_letter(*letter),
        }
    }

    /// True for the match-everything predicate
    #[inline]
    #[must_use]
    pub const fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }

    /// Number of leaf tests in the tree
    #[must_use]
    pub fn atom_count(&self) -> usize {
        match self {
            Self::Always => 0,
            Self::And(terms) | Self::Or(terms) => terms.iter().map(Self::atom_count).sum(),
            Self::Not(inner) => inner.atom_count(),
            Self::LetterAt { .. } | Self::Contains(_) => 1,
        }
    }

    fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    fn all_of(mut terms: Vec<Self>) -> Self {
        if terms.len() == 1 {
            terms.remove(0)
        } else {
            Self::And(terms)
        }
    }

    fn any_of(mut terms: Vec<Self>) -> Self {
        if terms.len() == 1 {
            terms.remove(0)
        } else {
            Self::Or(terms)
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(_) | Self::Or(_) => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }

    fn fmt_joined(terms: &[Self], op: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                write!(f, " {op} ")?;
            }
            term.fmt_operand(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("true"),
            Self::And(terms) => Self::fmt_joined(terms, "&&", f),
            Self::Or(terms) => Self::fmt_joined(terms, "||", f),
            Self::Not(inner) => match inner.as_ref() {
                Self::LetterAt { index, letter } => write!(f, "word[{index}] != {letter:?}"),
                Self::Contains(letter) => write!(f, "!word.contains({letter:?})"),
                other => write!(f, "!({other})"),
            },
            Self::LetterAt { index, letter } => write!(f, "word[{index}] == {letter:?}"),
            Self::Contains(letter) => write!(f, "word.contains({letter:?})"),
        }
    }
}

/// Compile criteria into a single predicate
///
/// # Examples
/// ```
/// use wordle_filter::core::{Criterion, Kind, Scope, Word};
/// use wordle_filter::filter::compile;
///
/// let criteria = [
///     Criterion::new(Kind::Exclude, "p", Scope::All),
///     Criterion::new(Kind::Is, "a", Scope::at(1).unwrap()),
/// ];
/// let predicate = compile(&criteria);
///
/// assert!(predicate.matches(&Word::new("amble").unwrap()));
/// assert!(!predicate.matches(&Word::new("apple").unwrap()));
/// assert_eq!(predicate.to_string(), "!word.contains('p') && word[0] == 'a'");
/// ```
#[must_use]
pub fn compile(criteria: &[Criterion]) -> Predicate {
    let mut terms = Vec::new();

    for criterion in criteria.iter().filter(|c| !c.is_empty()) {
        contribute(criterion, &mut terms);
    }

    if terms.is_empty() {
        Predicate::Always
    } else {
        Predicate::all_of(terms)
    }
}

fn contribute(criterion: &Criterion, terms: &mut Vec<Predicate>) {
    let letters = criterion.letters().chars();

    match criterion.scope() {
        Scope::Position(position) => {
            let index = position.index();
            let at = |letter| Predicate::LetterAt { index, letter };

            match criterion.kind() {
                Kind::Is => terms.extend(letters.map(at)),
                Kind::Not => terms.extend(letters.map(|l| at(l).negate())),
                Kind::Exclude => {
                    terms.push(Predicate::all_of(letters.map(|l| at(l).negate()).collect()));
                }
                Kind::Include => terms.push(Predicate::any_of(letters.map(at).collect())),
            }
        }
        Scope::All => match criterion.kind() {
            Kind::Include => terms.extend(letters.map(Predicate::Contains)),
            // Singleton kinds never reach scope All
            Kind::Exclude | Kind::Is | Kind::Not => {
                terms.extend(letters.map(|l| Predicate::Contains(l).negate()));
            }
        },
    }
}
