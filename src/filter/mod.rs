//! Word filtering
//!
//! Criteria store, predicate compiler, filtering engine and the session that
//! ties them to a debounced recompute.

pub mod debounce;
mod engine;
mod predicate;
mod session;
mod store;

pub use debounce::Debouncer;
pub use engine::{FilterEngine, PAGE_SIZE};
pub use predicate::{Predicate, compile};
pub use session::{LoadStatus, Session, SessionConfig};
pub use store::CriteriaStore;
