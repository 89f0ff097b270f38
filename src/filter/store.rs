//! Ordered, user-editable list of criteria

use crate::core::{Criterion, Edit};

/// Owns the criteria list and every user edit to it
///
/// Order is insertion order. It affects display only; the compiled predicate
/// is a conjunction, so reordering never changes the result set.
#[derive(Debug, Clone)]
pub struct CriteriaStore {
    criteria: Vec<Criterion>,
    revision: u64,
}

impl Default for CriteriaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CriteriaStore {
    /// A store holding a single default criterion
    #[must_use]
    pub fn new() -> Self {
        Self {
            criteria: vec![Criterion::default()],
            revision: 0,
        }
    }

    /// A store seeded with the given criteria
    #[must_use]
    pub fn from_criteria(criteria: Vec<Criterion>) -> Self {
        Self {
            criteria,
            revision: 0,
        }
    }

    /// Append a default criterion (`exclude`, no letters, scope `all`)
    pub fn add(&mut self) {
        self.criteria.push(Criterion::default());
        self.bump();
    }

    /// Remove the criterion at `index`
    ///
    /// Returns `false` and leaves the list untouched if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.criteria.len() {
            log::debug!("remove ignored: index {index} out of range");
            return false;
        }
        self.criteria.remove(index);
        self.bump();
        true
    }

    /// Apply one field edit to the criterion at `index`
    ///
    /// Returns `false` and leaves the list untouched if `index` is out of range.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Edit, Kind, Scope};
    /// use wordle_filter::filter::CriteriaStore;
    ///
    /// let mut store = CriteriaStore::new();
    /// store.update(0, Edit::Scope(Scope::at(3).unwrap()));
    /// store.update(0, Edit::Kind(Kind::Is));
    /// store.update(0, Edit::Letters("abc".into()));
    /// assert_eq!(store.criteria()[0].letters(), "c");
    ///
    /// assert!(!store.update(9, Edit::Letters("x".into())));
    /// ```
    pub fn update(&mut self, index: usize, edit: Edit) -> bool {
        let Some(criterion) = self.criteria.get_mut(index) else {
            log::debug!("update ignored: index {index} out of range");
            return false;
        };
        criterion.apply(edit);
        self.bump();
        true
    }

    #[inline]
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.criteria.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Number of successful mutations so far
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
