//! Filter criteria
//!
//! A criterion is one user-editable rule: a comparison kind, a set of letters
//! and a scope (the whole word or a single 1-based position).
//!
//! All mutation funnels through [`Criterion::apply`], which finishes with a
//! single normalization step so the invariants below always hold:
//! - `Is`/`Not` never appear at scope `All`
//! - `Is`/`Not` hold at most one letter (the most recently entered one)
//! - letters are lowercase

use super::word::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// Comparison semantics of a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// None of the letters may appear (at the position, or anywhere)
    #[default]
    Exclude,
    /// Positional: one of the letters; global: all of the letters
    Include,
    /// The position holds exactly this letter
    Is,
    /// The position does not hold this letter
    Not,
}

impl Kind {
    pub const ALL: [Self; 4] = [Self::Exclude, Self::Include, Self::Is, Self::Not];

    /// Singleton kinds hold a single letter and only make sense at a position
    #[inline]
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Is | Self::Not)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Include => "include",
            Self::Is => "is",
            Self::Not => "not",
        }
    }

    /// Next kind in selection order, skipping kinds that are invalid at `scope`
    #[must_use]
    pub fn cycle(self, scope: Scope) -> Self {
        let start = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        (1..=Self::ALL.len())
            .map(|step| Self::ALL[(start + step) % Self::ALL.len()])
            .find(|kind| kind.valid_at(scope))
            .unwrap_or_default()
    }

    /// Whether this kind may be used at `scope`
    #[must_use]
    pub const fn valid_at(self, scope: Scope) -> bool {
        !(self.is_singleton() && matches!(scope, Scope::All))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = CriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclude" => Ok(Self::Exclude),
            "include" => Ok(Self::Include),
            "is" => Ok(Self::Is),
            "not" => Ok(Self::Not),
            _ => Err(CriterionError::InvalidKind(s.to_string())),
        }
    }
}

/// A 1-based letter position, bounded to the corpus word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    /// Create a position from a 1-based value
    ///
    /// # Errors
    /// Returns `CriterionError::PositionOutOfRange` unless `1 <= value <= WORD_LENGTH`
    pub fn new(value: usize) -> Result<Self, CriterionError> {
        if (1..=WORD_LENGTH).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CriterionError::PositionOutOfRange(value))
        }
    }

    /// The 1-based position
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// The 0-based index into a word
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

/// Where a criterion applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// The whole word
    #[default]
    All,
    /// A single letter position
    Position(Position),
}

impl Scope {
    /// Scope at a 1-based position
    ///
    /// # Errors
    /// Returns `CriterionError::PositionOutOfRange` for positions outside the word
    pub fn at(position: usize) -> Result<Self, CriterionError> {
        Position::new(position).map(Self::Position)
    }

    /// Next scope in selection order: all, 1, 2, ... `WORD_LENGTH`, all
    #[must_use]
    pub fn cycle(self) -> Self {
        let next = match self {
            Self::All => 1,
            Self::Position(p) => p.get() + 1,
        };
        Self::at(next).unwrap_or(Self::All)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Position(p) => write!(f, "{}", p.get()),
        }
    }
}

impl FromStr for Scope {
    type Err = CriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let position: usize = s
            .parse()
            .map_err(|_| CriterionError::InvalidScope(s.to_string()))?;
        Self::at(position)
    }
}

/// Error type for criterion parsing and editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionError {
    UnknownField(String),
    InvalidKind(String),
    InvalidScope(String),
    PositionOutOfRange(usize),
    MalformedSpec(String),
}

impl fmt::Display for CriterionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(field) => {
                write!(f, "Unknown field '{field}' (expected kind, letters or scope)")
            }
            Self::InvalidKind(kind) => {
                write!(f, "Invalid kind '{kind}' (expected exclude, include, is or not)")
            }
            Self::InvalidScope(scope) => {
                write!(f, "Invalid scope '{scope}' (expected 'all' or 1-{WORD_LENGTH})")
            }
            Self::PositionOutOfRange(pos) => {
                write!(f, "Position {pos} is outside 1-{WORD_LENGTH}")
            }
            Self::MalformedSpec(spec) => {
                write!(f, "Malformed criterion '{spec}' (expected kind:scope[:letters])")
            }
        }
    }
}

impl std::error::Error for CriterionError {}

/// A change to one field of a criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Kind(Kind),
    Letters(String),
    Scope(Scope),
}

impl Edit {
    /// Build an edit from an untyped field name and value
    ///
    /// Field names accept both the long and short spellings
    /// (`kind`/`type`, `letters`/`value`, `scope`/`pos`/`position`).
    ///
    /// # Errors
    /// Returns `CriterionError` for unknown fields or unparseable values.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Edit, Kind};
    ///
    /// assert_eq!(Edit::parse("type", "IS").unwrap(), Edit::Kind(Kind::Is));
    /// assert!(Edit::parse("colour", "red").is_err());
    /// ```
    pub fn parse(field: &str, value: &str) -> Result<Self, CriterionError> {
        match field.trim().to_lowercase().as_str() {
            "kind" | "type" => value.parse().map(Self::Kind),
            "letters" | "value" => Ok(Self::Letters(value.to_string())),
            "scope" | "pos" | "position" => value.parse().map(Self::Scope),
            _ => Err(CriterionError::UnknownField(field.to_string())),
        }
    }
}

/// One filter rule
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criterion {
    kind: Kind,
    letters: String,
    scope: Scope,
}

impl Criterion {
    /// Create a normalized criterion
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Criterion, Kind, Scope};
    ///
    /// let c = Criterion::new(Kind::Is, "ABC", Scope::at(1).unwrap());
    /// assert_eq!(c.letters(), "c");
    ///
    /// let c = Criterion::new(Kind::Not, "x", Scope::All);
    /// assert_eq!(c.kind(), Kind::Exclude);
    /// ```
    #[must_use]
    pub fn new(kind: Kind, letters: impl Into<String>, scope: Scope) -> Self {
        let mut criterion = Self {
            kind,
            letters: letters.into(),
            scope,
        };
        criterion.normalize();
        criterion
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// A criterion with no letters contributes nothing to the predicate
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Set one field, then re-establish the invariants
    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::Kind(kind) => self.kind = kind,
            Edit::Letters(letters) => self.letters = letters,
            Edit::Scope(scope) => self.scope = scope,
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        if self.letters.chars().any(char::is_uppercase) {
            self.letters = self.letters.to_lowercase();
        }

        if !self.kind.valid_at(self.scope) {
            self.kind = Kind::Exclude;
        }

        // Singletons keep the most recently entered letter
        if self.kind.is_singleton()
            && let Some(last) = self.letters.chars().last()
            && self.letters.len() != last.len_utf8()
        {
            self.letters = last.to_string();
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.scope, self.letters)
    }
}

impl FromStr for Criterion {
    type Err = CriterionError;

    /// Parse the compact `kind:scope[:letters]` form, e.g. `exclude:all:pr` or `is:1:a`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(kind), Some(scope)) = (parts.next(), parts.next()) else {
            return Err(CriterionError::MalformedSpec(s.to_string()));
        };
        let letters = parts.next().unwrap_or_default();

        Ok(Self::new(kind.parse()?, letters, scope.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(p: usize) -> Scope {
        Scope::at(p).unwrap()
    }

    #[test]
    fn default_criterion() {
        let c = Criterion::default();
        assert_eq!(c.kind(), Kind::Exclude);
        assert_eq!(c.letters(), "");
        assert_eq!(c.scope(), Scope::All);
        assert!(c.is_empty());
    }

    #[test]
    fn letters_are_lowercased() {
        let mut c = Criterion::default();
        c.apply(Edit::Letters("PrX".to_string()));
        assert_eq!(c.letters(), "prx");
    }

    #[test]
    fn singleton_letters_truncate_to_last_typed() {
        let mut c = Criterion::new(Kind::Is, "", pos(3));
        c.apply(Edit::Letters("c".to_string()));
        assert_eq!(c.letters(), "c");

        c.apply(Edit::Letters("cd".to_string()));
        assert_eq!(c.letters(), "d");

        c.apply(Edit::Letters("XYZ".to_string()));
        assert_eq!(c.letters(), "z");
    }

    #[test]
    fn switching_to_singleton_truncates_existing_letters() {
        let mut c = Criterion::new(Kind::Include, "abc", pos(2));
        c.apply(Edit::Kind(Kind::Not));
        assert_eq!(c.kind(), Kind::Not);
        assert_eq!(c.letters(), "c");
    }

    #[test]
    fn editing_scope_in_singleton_mode_still_truncates() {
        let mut c = Criterion::new(Kind::Include, "abc", pos(2));
        c.kind = Kind::Is; // bypass normalization to simulate a stale multi-letter state
        c.apply(Edit::Scope(pos(4)));
        assert_eq!(c.letters(), "c");
        assert_eq!(c.scope(), pos(4));
    }

    #[test]
    fn scope_all_downgrades_singleton_to_exclude() {
        let mut c = Criterion::new(Kind::Is, "c", pos(3));
        c.apply(Edit::Scope(Scope::All));
        assert_eq!(c.kind(), Kind::Exclude);
        assert_eq!(c.letters(), "c");
        assert_eq!(c.scope(), Scope::All);
    }

    #[test]
    fn singleton_kind_rejected_at_scope_all() {
        let mut c = Criterion::default();
        c.apply(Edit::Kind(Kind::Not));
        assert_eq!(c.kind(), Kind::Exclude);
    }

    #[test]
    fn empty_letters_stay_empty_in_singleton_mode() {
        let mut c = Criterion::new(Kind::Is, "", pos(1));
        c.apply(Edit::Scope(pos(2)));
        assert_eq!(c.letters(), "");
    }

    #[test]
    fn singleton_truncation_is_char_aware() {
        let c = Criterion::new(Kind::Is, "aé", pos(1));
        assert_eq!(c.letters(), "é");
    }

    #[test]
    fn non_letter_input_is_kept_as_data() {
        let c = Criterion::new(Kind::Exclude, "\"}|&", Scope::All);
        assert_eq!(c.letters(), "\"}|&");
    }

    #[test]
    fn position_bounds() {
        assert!(Position::new(1).is_ok());
        assert!(Position::new(WORD_LENGTH).is_ok());
        assert_eq!(
            Position::new(0),
            Err(CriterionError::PositionOutOfRange(0))
        );
        assert_eq!(
            Position::new(WORD_LENGTH + 1),
            Err(CriterionError::PositionOutOfRange(WORD_LENGTH + 1))
        );
        assert_eq!(Position::new(3).unwrap().index(), 2);
    }

    #[test]
    fn scope_parse_and_cycle() {
        assert_eq!("all".parse::<Scope>().unwrap(), Scope::All);
        assert_eq!("ALL".parse::<Scope>().unwrap(), Scope::All);
        assert_eq!("2".parse::<Scope>().unwrap(), pos(2));
        assert!("7".parse::<Scope>().is_err());
        assert!("two".parse::<Scope>().is_err());

        assert_eq!(Scope::All.cycle(), pos(1));
        assert_eq!(pos(4).cycle(), pos(5));
        assert_eq!(pos(5).cycle(), Scope::All);
    }

    #[test]
    fn kind_cycle_skips_singletons_at_scope_all() {
        assert_eq!(Kind::Exclude.cycle(Scope::All), Kind::Include);
        assert_eq!(Kind::Include.cycle(Scope::All), Kind::Exclude);

        assert_eq!(Kind::Include.cycle(pos(1)), Kind::Is);
        assert_eq!(Kind::Is.cycle(pos(1)), Kind::Not);
        assert_eq!(Kind::Not.cycle(pos(1)), Kind::Exclude);
    }

    #[test]
    fn edit_parse_accepts_aliases() {
        assert_eq!(Edit::parse("kind", "not").unwrap(), Edit::Kind(Kind::Not));
        assert_eq!(
            Edit::parse("value", "ab").unwrap(),
            Edit::Letters("ab".to_string())
        );
        assert_eq!(Edit::parse("pos", "5").unwrap(), Edit::Scope(pos(5)));
        assert!(matches!(
            Edit::parse("colour", "red"),
            Err(CriterionError::UnknownField(_))
        ));
        assert!(matches!(
            Edit::parse("kind", "maybe"),
            Err(CriterionError::InvalidKind(_))
        ));
    }

    #[test]
    fn criterion_spec_round_trip() {
        let c: Criterion = "include:2:AB".parse().unwrap();
        assert_eq!(c.kind(), Kind::Include);
        assert_eq!(c.scope(), pos(2));
        assert_eq!(c.letters(), "ab");
        assert_eq!(c.to_string(), "include:2:ab");

        let c: Criterion = "exclude:all".parse().unwrap();
        assert!(c.is_empty());

        let c: Criterion = "exclude:all:a:b".parse().unwrap();
        assert_eq!(c.letters(), "a:b");

        assert!(matches!(
            "exclude".parse::<Criterion>(),
            Err(CriterionError::MalformedSpec(_))
        ));
    }
}
