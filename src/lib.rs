//! Word Filter
//!
//! Narrow a list of five-letter words with per-position and whole-word letter
//! criteria. Criteria compile into a single predicate that is re-run over the
//! corpus, and results are revealed one page at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::{Criterion, Kind, Scope};
//! use wordle_filter::filter::{Session, SessionConfig};
//! use wordle_filter::wordlists::loader::words_from_slice;
//!
//! let corpus = words_from_slice(&["apple", "amble", "angle", "crane"]);
//! let mut session = Session::with_corpus(corpus, SessionConfig::default());
//!
//! session.set_criteria(vec![
//!     Criterion::new(Kind::Is, "a", Scope::at(1).unwrap()),
//!     Criterion::new(Kind::Exclude, "p", Scope::All),
//! ]);
//!
//! let words: Vec<&str> = session.engine().window().map(|w| w.text()).collect();
//! assert_eq!(words, ["amble", "angle"]);
//! ```

// Core domain types
pub mod core;

// Criteria store, predicate compiler and result engine
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
