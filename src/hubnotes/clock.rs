//! Time source for note timestamps.
//!
//! Timestamps carry millisecond precision so that a note held in memory and the
//! same note read back from its ISO-8601 serialization compare equal.

use chrono::{DateTime, SubsecRound, Utc};
use std::rc::Rc;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, truncated to milliseconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

impl<T: Clock + ?Sized> Clock for Rc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::cell::Cell;

    /// A clock that only moves when told to.
    pub struct ManualClock {
        now: Cell<DateTime<Utc>>,
    }

    impl ManualClock {
        pub fn new(now: DateTime<Utc>) -> Self {
            Self {
                now: Cell::new(now),
            }
        }

        /// 2024-03-01 10:00:00 UTC
        pub fn at_ten() -> Self {
            Self::new(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
        }

        pub fn set(&self, now: DateTime<Utc>) {
            self.now.set(now);
        }

        pub fn advance_minutes(&self, minutes: i64) {
            self.now.set(self.now.get() + Duration::minutes(minutes));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::ManualClock;
    use super::*;
    use chrono::Timelike;

    #[test]
    fn system_clock_has_millisecond_precision() {
        let now = SystemClock.now();
        assert_eq!(now.nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn shared_manual_clock_advances_for_all_holders() {
        let clock = Rc::new(ManualClock::at_ten());
        let held = Rc::clone(&clock);
        let before = held.now();
        clock.advance_minutes(5);
        assert_eq!(held.now() - before, chrono::Duration::minutes(5));
    }
}
