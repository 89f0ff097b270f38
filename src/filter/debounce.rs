//! Cancellable scheduled recompute
//!
//! A single-slot timer: scheduling replaces any pending deadline, so a burst of
//! edits collapses into one recompute. The host loop polls it once per tick.

use std::time::{Duration, Instant};

/// Default recompute delay: run on the next tick
pub const DEFAULT_DEBOUNCE: Duration = Duration::ZERO;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel any pending run and schedule a new one `delay` after `now`
    pub fn schedule(&mut self, now: Instant) {
        if self.deadline.is_some() {
            log::trace!("debounce: rescheduling pending recompute");
        }
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending run, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Time left until the pending run is due, `None` when idle
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the pending run if its deadline has passed
    ///
    /// Returns `true` exactly once per scheduled run.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(Instant::now()));
    }

    #[test]
    fn zero_delay_fires_on_next_poll_once() {
        let mut debouncer = Debouncer::default();
        let now = Instant::now();

        debouncer.schedule(now);
        assert!(debouncer.is_pending());
        assert!(debouncer.fire_if_due(now));
        assert!(!debouncer.fire_if_due(now));
    }

    #[test]
    fn burst_of_schedules_coalesces() {
        let mut debouncer = Debouncer::default();
        let now = Instant::now();

        for _ in 0..10 {
            debouncer.schedule(now);
        }

        let fired = (0..10).filter(|_| debouncer.fire_if_due(now)).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn reschedule_pushes_deadline_back() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        let start = Instant::now();

        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(40));

        assert!(!debouncer.fire_if_due(start + Duration::from_millis(60)));
        assert_eq!(
            debouncer.remaining(start + Duration::from_millis(60)),
            Some(Duration::from_millis(30))
        );
        assert!(debouncer.fire_if_due(start + Duration::from_millis(90)));
    }

    #[test]
    fn cancel_drops_pending_run() {
        let mut debouncer = Debouncer::default();
        let now = Instant::now();

        debouncer.schedule(now);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(now));
        assert_eq!(debouncer.remaining(now), None);
    }
}
