//! Formatting utilities for terminal output

use crate::core::{Criterion, Kind, Scope, Word};
use crate::filter::Predicate;

/// Placeholder shown while no criterion contributes anything
pub const EMPTY_PREDICATE_TEXT: &str = "Start filtering...";

/// Render the compiled predicate, or the placeholder when it matches everything
#[must_use]
pub fn predicate_text(predicate: &Predicate) -> String {
    if predicate.is_always() {
        EMPTY_PREDICATE_TEXT.to_string()
    } else {
        predicate.to_string()
    }
}

/// One-line description of a criterion, e.g. `include @2 [ab]`
#[must_use]
pub fn criterion_label(criterion: &Criterion) -> String {
    let scope = match criterion.scope() {
        Scope::All => "all".to_string(),
        Scope::Position(p) => p.get().to_string(),
    };
    format!(
        "{:<7} @{:<3} [{}]",
        criterion.kind(),
        scope,
        criterion.letters()
    )
}

/// Hint for the letters field, matching what the kind accepts
#[must_use]
pub const fn letters_placeholder(kind: Kind) -> &'static str {
    if kind.is_singleton() { "A" } else { "ABC" }
}

/// Lay words out in rows of `columns`
#[must_use]
pub fn results_grid<'a>(words: impl Iterator<Item = &'a Word>, columns: usize) -> Vec<String> {
    let words: Vec<&str> = words.map(Word::text).collect();
    words
        .chunks(columns.max(1))
        .map(|row| row.join("  "))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the result set is on screen
#[must_use]
pub fn window_bar(shown: usize, total: usize, width: usize) -> String {
    create_progress_bar(shown as f64, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::compile;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn predicate_text_placeholder_when_empty() {
        assert_eq!(predicate_text(&Predicate::Always), EMPTY_PREDICATE_TEXT);

        let predicate = compile(&[Criterion::new(Kind::Exclude, "p", Scope::All)]);
        assert_eq!(predicate_text(&predicate), "!word.contains('p')");
    }

    #[test]
    fn criterion_label_layout() {
        let c = Criterion::new(Kind::Include, "ab", Scope::at(2).unwrap());
        assert_eq!(criterion_label(&c), "include @2   [ab]");

        assert_eq!(criterion_label(&Criterion::default()), "exclude @all []");
    }

    #[test]
    fn letters_placeholder_by_kind() {
        assert_eq!(letters_placeholder(Kind::Is), "A");
        assert_eq!(letters_placeholder(Kind::Include), "ABC");
    }

    #[test]
    fn results_grid_rows() {
        let words = words_from_slice(&["apple", "amble", "angle", "crane", "slate"]);
        let rows = results_grid(words.iter(), 2);
        assert_eq!(rows, ["apple  amble", "angle  crane", "slate"]);

        assert!(results_grid(std::iter::empty(), 4).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn window_bar_with_no_results() {
        assert_eq!(window_bar(0, 0, 4), "░░░░");
    }
}
