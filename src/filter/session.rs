//! Filtering session
//!
//! Wires the criteria store, the predicate compiler and the filtering engine
//! together. Every store mutation schedules a recompute on the debouncer; the
//! host loop calls [`Session::tick`] once per scheduling tick, and at most one
//! recompute (compile + full rescan) runs per burst of edits.
//!
//! The pending recompute is a deadline owned by the session, not a detached
//! timer, so dropping the session cancels it.

use super::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use super::engine::{FilterEngine, PAGE_SIZE};
use super::predicate::{Predicate, compile};
use super::store::CriteriaStore;
use crate::core::{Criterion, Edit, Word};
use std::fmt;
use std::time::{Duration, Instant};

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Results revealed per page
    pub page_size: usize,
    /// Delay between the last edit and the recompute
    pub debounce: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// State of the one-time corpus load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded(usize),
    Failed(String),
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading word list..."),
            Self::Loaded(count) => write!(f, "{count} words loaded"),
            Self::Failed(reason) => write!(f, "word list unavailable: {reason}"),
        }
    }
}

/// One interactive filtering session
pub struct Session {
    store: CriteriaStore,
    engine: FilterEngine,
    predicate: Predicate,
    debouncer: Debouncer,
    status: LoadStatus,
    recomputes: u64,
}

impl Session {
    /// A session whose corpus is still being loaded
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            store: CriteriaStore::new(),
            engine: FilterEngine::new(Vec::new(), config.page_size),
            predicate: Predicate::Always,
            debouncer: Debouncer::new(config.debounce),
            status: LoadStatus::Loading,
            recomputes: 0,
        }
    }

    /// A session over an already loaded corpus
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Edit;
    /// use wordle_filter::filter::{Session, SessionConfig};
    /// use wordle_filter::wordlists::loader::words_from_slice;
    ///
    /// let corpus = words_from_slice(&["apple", "amble", "angle"]);
    /// let mut session = Session::with_corpus(corpus, SessionConfig::default());
    ///
    /// session.edit_criterion(0, Edit::Letters("p".into()));
    /// assert_eq!(session.engine().result_count(), 3); // not recomputed yet
    ///
    /// session.flush();
    /// assert_eq!(session.engine().result_count(), 2);
    /// ```
    #[must_use]
    pub fn with_corpus(corpus: Vec<Word>, config: SessionConfig) -> Self {
        let mut session = Self::new(config);
        session.finish_load(Ok::<_, std::convert::Infallible>(corpus));
        session
    }

    /// Replace the criteria wholesale and recompute immediately
    pub fn set_criteria(&mut self, criteria: Vec<Criterion>) {
        self.store = CriteriaStore::from_criteria(criteria);
        self.debouncer.cancel();
        self.recompute();
    }

    /// Mark a (re)load as in flight
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Record the outcome of the corpus load
    ///
    /// On failure the corpus stays empty and the reason is kept for display.
    pub fn finish_load<E: fmt::Display>(&mut self, result: Result<Vec<Word>, E>) {
        match result {
            Ok(words) => {
                log::info!("corpus loaded: {} words", words.len());
                self.status = LoadStatus::Loaded(words.len());
                self.engine.set_corpus(words, &self.predicate);
            }
            Err(err) => {
                log::warn!("corpus load failed: {err}");
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }

    pub fn add_criterion(&mut self) {
        self.store.add();
        self.schedule();
    }

    /// Returns `false` (and schedules nothing) for an out-of-range index
    pub fn remove_criterion(&mut self, index: usize) -> bool {
        let removed = self.store.remove(index);
        if removed {
            self.schedule();
        }
        removed
    }

    /// Returns `false` (and schedules nothing) for an out-of-range index
    pub fn edit_criterion(&mut self, index: usize, edit: Edit) -> bool {
        let edited = self.store.update(index, edit);
        if edited {
            self.schedule();
        }
        edited
    }

    /// Reveal one more page of results
    pub fn load_more(&mut self) -> usize {
        self.engine.load_more()
    }

    /// Run the pending recompute if it is due
    ///
    /// Returns `true` if a recompute ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debouncer.fire_if_due(now) {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Run the pending recompute now, regardless of its deadline
    pub fn flush(&mut self) -> bool {
        if self.debouncer.is_pending() {
            self.debouncer.cancel();
            self.recompute();
            true
        } else {
            false
        }
    }

    #[inline]
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        self.store.criteria()
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &CriteriaStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub const fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    /// The predicate behind the current result set
    #[inline]
    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// How long the host loop may sleep before the next recompute is due
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Number of recomputes run so far
    #[inline]
    #[must_use]
    pub const fn recomputes(&self) -> u64 {
        self.recomputes
    }

    fn schedule(&mut self) {
        self.debouncer.schedule(Instant::now());
    }

    fn recompute(&mut self) {
        self.predicate = compile(self.store.criteria());
        self.engine.refilter(&self.predicate);
        self.recomputes += 1;
        log::debug!(
            "recompute #{} (revision {}): {}",
            self.recomputes,
            self.store.revision(),
            self.predicate
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Kind, Scope};
    use crate::wordlists::loader::words_from_slice;

    fn session() -> Session {
        Session::with_corpus(
            words_from_slice(&["apple", "amble", "angle"]),
            SessionConfig::default(),
        )
    }

    fn shown(session: &Session) -> Vec<&str> {
        session.engine().window().map(Word::text).collect()
    }

    #[test]
    fn loaded_session_shows_whole_corpus() {
        let session = session();
        assert_eq!(session.status(), &LoadStatus::Loaded(3));
        assert!(session.predicate().is_always());
        assert_eq!(shown(&session), ["apple", "amble", "angle"]);
    }

    #[test]
    fn edits_apply_on_next_tick() {
        let mut session = session();
        session.edit_criterion(0, Edit::Letters("p".to_string()));

        assert!(session.is_pending());
        assert_eq!(session.engine().result_count(), 3);

        assert!(session.tick(Instant::now()));
        assert_eq!(shown(&session), ["amble", "angle"]);
        assert_eq!(
            session.predicate(),
            &Predicate::Not(Box::new(Predicate::Contains('p')))
        );
    }

    #[test]
    fn burst_of_edits_recomputes_once() {
        let mut session = session();
        session.edit_criterion(0, Edit::Letters("p".to_string()));
        session.add_criterion();
        session.edit_criterion(1, Edit::Scope(Scope::at(1).unwrap()));
        session.edit_criterion(1, Edit::Kind(Kind::Is));
        session.edit_criterion(1, Edit::Letters("a".to_string()));
        session.add_criterion();
        session.edit_criterion(2, Edit::Scope(Scope::at(5).unwrap()));
        session.edit_criterion(2, Edit::Kind(Kind::Include));
        session.edit_criterion(2, Edit::Letters("le".to_string()));

        let now = Instant::now();
        assert!(session.tick(now));
        assert!(!session.tick(now));
        assert_eq!(session.recomputes(), 1);
        assert_eq!(shown(&session), ["amble", "angle"]);
    }

    #[test]
    fn rejected_edits_schedule_nothing() {
        let mut session = session();
        assert!(!session.remove_criterion(5));
        assert!(!session.edit_criterion(5, Edit::Letters("x".to_string())));
        assert!(!session.is_pending());
        assert!(!session.flush());
    }

    #[test]
    fn delayed_recompute_waits_for_deadline() {
        let config = SessionConfig {
            debounce: Duration::from_secs(60),
            ..SessionConfig::default()
        };
        let mut session =
            Session::with_corpus(words_from_slice(&["apple", "amble"]), config);

        session.edit_criterion(0, Edit::Letters("p".to_string()));
        assert!(!session.tick(Instant::now()));
        assert!(session.next_deadline(Instant::now()).is_some());

        assert!(session.tick(Instant::now() + Duration::from_secs(61)));
        assert_eq!(shown(&session), ["amble"]);
    }

    #[test]
    fn failed_load_keeps_corpus_empty() {
        let mut session = Session::new(SessionConfig::default());
        assert_eq!(session.status(), &LoadStatus::Loading);

        session.finish_load::<String>(Err("connection refused".to_string()));

        assert_eq!(
            session.status(),
            &LoadStatus::Failed("connection refused".to_string())
        );
        assert_eq!(session.engine().result_count(), 0);
    }

    #[test]
    fn late_load_uses_current_predicate() {
        let mut session = Session::new(SessionConfig::default());
        session.edit_criterion(0, Edit::Letters("p".to_string()));
        session.flush();

        session.finish_load::<String>(Ok(words_from_slice(&["apple", "amble"])));
        assert_eq!(shown(&session), ["amble"]);
    }

    #[test]
    fn scope_all_on_is_criterion_downgrades_to_exclude() {
        let mut session = Session::with_corpus(
            words_from_slice(&["cacao", "crane", "place"]),
            SessionConfig::default(),
        );
        session.edit_criterion(0, Edit::Scope(Scope::at(3).unwrap()));
        session.edit_criterion(0, Edit::Kind(Kind::Is));
        session.edit_criterion(0, Edit::Letters("c".to_string()));
        session.flush();
        assert_eq!(shown(&session), ["cacao"]);

        session.edit_criterion(0, Edit::Scope(Scope::All));
        session.flush();
        assert_eq!(session.criteria()[0].kind(), Kind::Exclude);
        assert_eq!(shown(&session), Vec::<&str>::new());
    }

    #[test]
    fn load_more_after_recompute_starts_from_first_page() {
        let corpus: Vec<Word> = (0..230)
            .map(|i| Word::new(format!("x{i:04}")).unwrap())
            .collect();
        let mut session = Session::with_corpus(corpus, SessionConfig::default());

        assert_eq!(session.load_more(), 200);

        session.edit_criterion(0, Edit::Letters("9".to_string()));
        session.flush();
        // 230 words, those without a '9' anywhere
        let expected = (0..230).filter(|i| !format!("{i:04}").contains('9')).count();
        assert_eq!(session.engine().result_count(), expected);
        assert_eq!(session.engine().window_len(), expected.min(100));
    }

    #[test]
    fn pending_recompute_is_owned_by_its_session() {
        let mut session = session();
        session.edit_criterion(0, Edit::Letters("p".to_string()));
        assert!(session.is_pending());
        drop(session);

        // A fresh session over the same corpus starts idle and unfiltered
        let mut session = self::session();
        assert!(!session.is_pending());
        assert!(!session.tick(Instant::now() + Duration::from_secs(60)));
        assert_eq!(session.recomputes(), 0);
        assert_eq!(shown(&session), ["apple", "amble", "angle"]);
    }

    #[test]
    fn with_corpus_starts_loaded_without_recompute() {
        let session = Session::with_corpus(words_from_slice(&["apple"]), SessionConfig::default());
        assert_eq!(session.status(), &LoadStatus::Loaded(1));
        assert_eq!(session.recomputes(), 0);
        assert_eq!(session.engine().result_count(), 1);
    }

    #[test]
    fn set_criteria_recomputes_immediately() {
        let mut session = session();
        session.set_criteria(vec![Criterion::new(Kind::Include, "g", Scope::All)]);
        assert!(!session.is_pending());
        assert_eq!(shown(&session), ["angle"]);
    }
}
