//! Cancellable auto-advance deadline
//!
//! The event loop polls `fire_if_due` between keystrokes; there is no
//! background thread. At most one deadline is pending at a time.

use std::time::{Duration, Instant};

#[derive(Clone, Debug, Default)]
pub struct AdvanceTimer {
    due: Option<Instant>,
}

impl AdvanceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an advance `delay` after `now`, replacing any pending one
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Drop the pending advance. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.due.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Consume the deadline once it has been reached
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
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
    fn test_fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = AdvanceTimer::new();
        timer.schedule(start, Duration::from_secs(1));

        assert!(!timer.fire_if_due(start + Duration::from_millis(999)));
        assert!(timer.fire_if_due(start + Duration::from_secs(1)));
        assert!(!timer.fire_if_due(start + Duration::from_secs(2)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timer = AdvanceTimer::new();
        timer.schedule(start, Duration::from_secs(1));
        timer.schedule(start, Duration::from_secs(3));

        assert_eq!(timer.due(), Some(start + Duration::from_secs(3)));
        assert!(!timer.fire_if_due(start + Duration::from_secs(2)));
        assert!(timer.fire_if_due(start + Duration::from_secs(3)));
        assert!(!timer.fire_if_due(start + Duration::from_secs(4)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut timer = AdvanceTimer::new();
        assert!(!timer.cancel());

        timer.schedule(start, Duration::ZERO);
        assert!(timer.cancel());
        assert!(!timer.fire_if_due(start + Duration::from_secs(5)));
    }
}
