//! Event countdown.
//!
//! The countdown is a pure derived value: callers recompute it from the
//! target timestamp on every tick and never store it as authoritative
//! state. There is no internal thread; whoever displays the countdown
//! owns the 1-second tick and tears it down with the view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remaining-time breakdown until a fixed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownParts {
    pub days: i64,
    /// 0..=23
    pub hours: i64,
    /// 0..=59
    pub minutes: i64,
    /// 0..=59
    pub seconds: i64,
    pub is_expired: bool,
}

impl CountdownParts {
    /// Break `target - now` into whole days/hours/minutes/seconds.
    /// At or past the target every field is zero and `is_expired` is set.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (target - now).num_seconds();
        if remaining <= 0 {
            return Self::expired();
        }

        Self {
            days: remaining / 86_400,
            hours: (remaining % 86_400) / 3_600,
            minutes: (remaining % 3_600) / 60,
            seconds: remaining % 60,
            is_expired: false,
        }
    }

    pub fn expired() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            is_expired: true,
        }
    }
}

/// A fixed-target countdown. Recomputing after expiry is idempotent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountdownClock {
    target: DateTime<Utc>,
}

impl CountdownClock {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> CountdownParts {
        CountdownParts::until(self.target, now)
    }

    pub fn remaining_now(&self) -> CountdownParts {
        self.remaining(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn one_day_out() {
        let parts = CountdownParts::until(now() + Duration::days(1), now());
        assert_eq!(
            parts,
            CountdownParts {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0,
                is_expired: false
            }
        );
    }

    #[test]
    fn mixed_breakdown() {
        let target = now()
            + Duration::days(2)
            + Duration::hours(12)
            + Duration::minutes(4)
            + Duration::seconds(45);
        let parts = CountdownParts::until(target, now());
        assert_eq!(parts.days, 2);
        assert_eq!(parts.hours, 12);
        assert_eq!(parts.minutes, 4);
        assert_eq!(parts.seconds, 45);
        assert!(!parts.is_expired);
    }

    #[test]
    fn past_target_clamps_to_zero() {
        let parts = CountdownParts::until(now() - Duration::hours(3), now());
        assert_eq!(parts, CountdownParts::expired());
    }

    #[test]
    fn exact_target_is_expired() {
        let parts = CountdownParts::until(now(), now());
        assert!(parts.is_expired);
    }

    #[test]
    fn expired_ticks_are_idempotent() {
        let clock = CountdownClock::new(now() - Duration::seconds(1));
        let first = clock.remaining(now());
        let second = clock.remaining(now() + Duration::seconds(30));
        assert_eq!(first, second);
        assert!(second.is_expired);
    }

    #[test]
    fn fields_stay_in_range() {
        let target = now() + Duration::seconds(86_399);
        let parts = CountdownParts::until(target, now());
        assert_eq!(parts.days, 0);
        assert_eq!(parts.hours, 23);
        assert_eq!(parts.minutes, 59);
        assert_eq!(parts.seconds, 59);
    }
}
