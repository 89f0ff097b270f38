//! Corpus filtering and result paging

use super::predicate::Predicate;
use crate::core::Word;

/// Default number of results revealed per page
pub const PAGE_SIZE: usize = 100;

/// Applies a compiled predicate to the corpus
///
/// Holds the corpus, the current result set (corpus order preserved) and the
/// size of the display window over it.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    corpus: Vec<Word>,
    results: Vec<usize>,
    window: usize,
    page_size: usize,
}

impl FilterEngine {
    /// Create an engine over `corpus`, initially matching every word
    ///
    /// A zero `page_size` is treated as 1.
    #[must_use]
    pub fn new(corpus: Vec<Word>, page_size: usize) -> Self {
        let mut engine = Self {
            corpus,
            results: Vec::new(),
            window: 0,
            page_size: page_size.max(1),
        };
        engine.refilter(&Predicate::Always);
        engine
    }

    /// Replace the corpus and rescan it with `predicate`
    pub fn set_corpus(&mut self, corpus: Vec<Word>, predicate: &Predicate) {
        self.corpus = corpus;
        self.refilter(predicate);
    }

    /// Rescan the whole corpus and reset the display window to the first page
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Criterion, Kind, Scope};
    /// use wordle_filter::filter::{FilterEngine, compile};
    /// use wordle_filter::wordlists::loader::words_from_slice;
    ///
    /// let corpus = words_from_slice(&["apple", "amble", "angle"]);
    /// let mut engine = FilterEngine::new(corpus, 100);
    ///
    /// engine.refilter(&compile(&[Criterion::new(Kind::Exclude, "p", Scope::All)]));
    /// let shown: Vec<&str> = engine.window().map(|w| w.text()).collect();
    /// assert_eq!(shown, ["amble", "angle"]);
    /// ```
    pub fn refilter(&mut self, predicate: &Predicate) {
        self.results = if predicate.is_always() {
            (0..self.corpus.len()).collect()
        } else {
            self.corpus
                .iter()
                .enumerate()
                .filter(|(_, word)| predicate.matches(word))
                .map(|(i, _)| i)
                .collect()
        };
        self.window = self.page_size.min(self.results.len());

        log::debug!(
            "rescanned {} words: {} match, showing {}",
            self.corpus.len(),
            self.results.len(),
            self.window
        );
    }

    /// Reveal one more page, clamped to the result count
    ///
    /// Returns the new window size.
    pub fn load_more(&mut self) -> usize {
        self.window = self.window.saturating_add(self.page_size).min(self.results.len());
        self.window
    }

    /// Whether results exist beyond the display window
    #[inline]
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.window < self.results.len()
    }

    /// All matching words, in corpus order
    pub fn results(&self) -> impl ExactSizeIterator<Item = &Word> + '_ {
        self.results.iter().map(|&i| &self.corpus[i])
    }

    /// The displayed prefix of the results
    pub fn window(&self) -> impl ExactSizeIterator<Item = &Word> + '_ {
        self.results[..self.window].iter().map(|&i| &self.corpus[i])
    }

    #[inline]
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    #[inline]
    #[must_use]
    pub const fn window_len(&self) -> usize {
        self.window
    }

    #[inline]
    #[must_use]
    pub fn corpus(&self) -> &[Word] {
        &self.corpus
    }

    #[inline]
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }
}
