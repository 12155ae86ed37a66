// Countdown contract exposed to hosts rendering the timer, plus the shared
// remaining-time helpers used in notification messages.

use chrono::{DateTime, TimeDelta, Utc};

/// A running countdown to a fixed instant. The host ticks it once per second;
/// all methods are pure functions of the supplied `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub final_date: DateTime<Utc>,
}

impl Countdown {
    pub fn new(final_date: DateTime<Utc>) -> Self {
        Self { final_date }
    }

    /// Milliseconds until the final date. Negative once past it.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> i64 {
        (self.final_date - now).num_milliseconds()
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.remaining_ms(now) <= 0
    }

    /// `H:MM:SS` form for display, clamped at zero.
    pub fn display(&self, now: DateTime<Utc>) -> String {
        let total_seconds = (self.final_date - now).num_seconds().max(0);
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Human-relative phrase for a future instant, e.g. "in 5 minutes".
/// Thresholds follow the usual humanize convention: under 45 seconds reads
/// as "a few seconds", 45-89 seconds as "a minute", then rounded minutes up
/// to 44, then "an hour" / rounded hours.
pub fn from_now_phrase(remaining: TimeDelta) -> String {
    let seconds = remaining.num_seconds().max(0);
    if seconds < 45 {
        return "in a few seconds".to_string();
    }
    if seconds < 90 {
        return "in a minute".to_string();
    }
    let minutes = (seconds + 30) / 60;
    if minutes < 45 {
        return format!("in {} minutes", minutes);
    }
    if minutes < 90 {
        return "in an hour".to_string();
    }
    let hours = (minutes + 30) / 60;
    format!("in {} hours", hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_remaining_and_finished() {
        let start = Utc.with_ymd_and_hms(2024, 2, 5, 7, 0, 0).unwrap();
        let countdown = Countdown::new(start);

        let now = start - TimeDelta::seconds(90);
        assert_eq!(countdown.remaining_ms(now), 90_000);
        assert!(!countdown.is_finished(now));
        assert!(countdown.is_finished(start));
        assert!(countdown.is_finished(start + TimeDelta::seconds(1)));
    }

    #[test]
    fn test_display_format() {
        let start = Utc.with_ymd_and_hms(2024, 2, 5, 7, 0, 0).unwrap();
        let countdown = Countdown::new(start);

        let now = start - TimeDelta::seconds(3661);
        assert_eq!(countdown.display(now), "1:01:01");
        assert_eq!(countdown.display(start - TimeDelta::seconds(59)), "0:00:59");
        // Clamped once finished
        assert_eq!(countdown.display(start + TimeDelta::seconds(5)), "0:00:00");
    }

    #[test]
    fn test_from_now_phrase_thresholds() {
        assert_eq!(from_now_phrase(TimeDelta::seconds(10)), "in a few seconds");
        assert_eq!(from_now_phrase(TimeDelta::seconds(44)), "in a few seconds");
        assert_eq!(from_now_phrase(TimeDelta::seconds(45)), "in a minute");
        assert_eq!(from_now_phrase(TimeDelta::seconds(89)), "in a minute");
        assert_eq!(from_now_phrase(TimeDelta::seconds(300)), "in 5 minutes");
        assert_eq!(from_now_phrase(TimeDelta::minutes(44)), "in 44 minutes");
        assert_eq!(from_now_phrase(TimeDelta::minutes(60)), "in an hour");
        assert_eq!(from_now_phrase(TimeDelta::hours(2)), "in 2 hours");
        // Never a negative phrase
        assert_eq!(from_now_phrase(TimeDelta::seconds(-5)), "in a few seconds");
    }
}
