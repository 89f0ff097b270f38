//! Core domain types for word filtering
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and enforce their own invariants.

mod criterion;
mod word;

pub use criterion::{Criterion, CriterionError, Edit, Kind, Position, Scope};
pub use word::{WORD_LENGTH, Word, WordError};
