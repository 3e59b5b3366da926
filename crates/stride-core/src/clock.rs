//! Wall-clock abstraction.
//!
//! Every calendar decision in the engine (after-17:00 gates, Monday/weekend
//! checks, the local-day reset) goes through a `Clock` so tests can pin the
//! time instead of depending on the host machine.

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock time.
pub trait Clock {
    /// Current local date and time (device calendar/timezone).
    fn now(&self) -> NaiveDateTime;
}

/// Production clock backed by the system's local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_system_clock_returns_current_year() {
        let now = SystemClock.now();
        assert!(now.year() >= 2024);
    }
}
