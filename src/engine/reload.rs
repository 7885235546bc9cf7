//! Post-completion reload timer.
//!
//! When a quiz completes with no destination configured, the widget shows
//! the local thank-you view and reloads the page after a fixed delay so
//! the user is never stranded with no next action. The engine hands the
//! host a [`ReloadTimer`]; the host fires the reload when it becomes due.
//! Dropping the handle cancels it, but fire-after-delay is the default.

use std::time::{Duration, Instant};

/// How long the thank-you view stays up before the reload fires.
pub const RELOAD_DELAY: Duration = Duration::from_millis(3000);

/// A pending page reload, due [`RELOAD_DELAY`] after it was scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadTimer {
    deadline: Instant,
}

impl ReloadTimer {
    /// Schedule a reload starting now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Schedule a reload measured from an explicit start, so tests can
    /// simulate time advancement.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            deadline: start + RELOAD_DELAY,
        }
    }

    /// When the reload fires.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// True once the delay has elapsed.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before the reload fires (zero once due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

impl Default for ReloadTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_before_delay() {
        let start = Instant::now();
        let timer = ReloadTimer::starting_at(start);
        assert!(!timer.is_due(start));
        assert!(!timer.is_due(start + Duration::from_millis(2999)));
    }

    #[test]
    fn test_due_at_and_after_delay() {
        let start = Instant::now();
        let timer = ReloadTimer::starting_at(start);
        assert!(timer.is_due(start + RELOAD_DELAY));
        assert!(timer.is_due(start + Duration::from_secs(60)));
    }

    #[test]
    fn test_remaining_counts_down() {
        let start = Instant::now();
        let timer = ReloadTimer::starting_at(start);
        assert_eq!(timer.remaining(start), RELOAD_DELAY);
        assert_eq!(
            timer.remaining(start + Duration::from_millis(1000)),
            Duration::from_millis(2000)
        );
        assert_eq!(timer.remaining(start + Duration::from_secs(10)), Duration::ZERO);
    }
}
