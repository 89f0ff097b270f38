//! One-shot filter command
//!
//! Applies a fixed list of criteria to the corpus and reports the result pages.

use crate::core::{Criterion, Word};
use crate::filter::{Predicate, Session, SessionConfig};

/// Configuration for a one-shot filter run
pub struct FilterConfig {
    pub criteria: Vec<Criterion>,
    /// Number of pages to reveal (at least one)
    pub pages: usize,
    /// Reveal every match regardless of `pages`
    pub show_all: bool,
}

impl FilterConfig {
    #[must_use]
    pub const fn new(criteria: Vec<Criterion>) -> Self {
        Self {
            criteria,
            pages: 1,
            show_all: false,
        }
    }
}

/// Result of a one-shot filter run
pub struct FilterReport {
    pub criteria: Vec<Criterion>,
    pub predicate: Predicate,
    pub corpus_size: usize,
    pub matches: usize,
    pub shown: Vec<String>,
    pub has_more: bool,
}

/// Filter `corpus` with the configured criteria
///
/// # Examples
/// ```
/// use wordle_filter::commands::{FilterConfig, run_filter};
/// use wordle_filter::filter::SessionConfig;
/// use wordle_filter::wordlists::loader::words_from_slice;
///
/// let corpus = words_from_slice(&["apple", "amble", "angle"]);
/// let config = FilterConfig::new(vec!["exclude:all:p".parse().unwrap()]);
///
/// let report = run_filter(corpus, config, SessionConfig::default());
/// assert_eq!(report.shown, ["amble", "angle"]);
/// ```
#[must_use]
pub fn run_filter(
    corpus: Vec<Word>,
    config: FilterConfig,
    session_config: SessionConfig,
) -> FilterReport {
    let mut session = Session::with_corpus(corpus, session_config);
    session.set_criteria(config.criteria);

    let mut pages = 1;
    while session.engine().has_more() && (config.show_all || pages < config.pages) {
        session.load_more();
        pages += 1;
    }

    let engine = session.engine();
    FilterReport {
        criteria: session.criteria().to_vec(),
        predicate: session.predicate().clone(),
        corpus_size: engine.corpus().len(),
        matches: engine.result_count(),
        shown: engine.window().map(|w| w.text().to_string()).collect(),
        has_more: engine.has_more(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Kind, Scope};
    use crate::wordlists::loader::words_from_slice;

    fn numbered_corpus(count: usize) -> Vec<Word> {
        (0..count)
            .map(|i| Word::new(format!("n{i:04}")).unwrap())
            .collect()
    }

    #[test]
    fn no_criteria_reports_whole_corpus() {
        let corpus = words_from_slice(&["apple", "amble", "angle"]);
        let report = run_filter(corpus, FilterConfig::new(vec![]), SessionConfig::default());

        assert!(report.predicate.is_always());
        assert_eq!(report.matches, 3);
        assert_eq!(report.corpus_size, 3);
        assert!(!report.has_more);
    }

    #[test]
    fn reference_corpus_narrowing() {
        let corpus = words_from_slice(&["apple", "amble", "angle"]);
        let config = FilterConfig::new(vec![
            Criterion::new(Kind::Exclude, "p", Scope::All),
            Criterion::new(Kind::Is, "a", Scope::at(1).unwrap()),
            Criterion::new(Kind::Include, "le", Scope::at(5).unwrap()),
        ]);

        let report = run_filter(corpus, config, SessionConfig::default());
        assert_eq!(report.shown, ["amble", "angle"]);
    }

    #[test]
    fn pages_reveal_more_results() {
        let mut config = FilterConfig::new(vec![]);
        config.pages = 2;
        let report = run_filter(numbered_corpus(350), config, SessionConfig::default());

        assert_eq!(report.shown.len(), 200);
        assert!(report.has_more);
    }

    #[test]
    fn show_all_reveals_everything() {
        let mut config = FilterConfig::new(vec![]);
        config.show_all = true;
        let report = run_filter(numbered_corpus(350), config, SessionConfig::default());

        assert_eq!(report.shown.len(), 350);
        assert!(!report.has_more);
    }
}
