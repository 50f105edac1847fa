//! Human-readable durations and timestamps.

use chrono::{NaiveDateTime, TimeDelta};

const UNITS: [(&str, i64); 5] = [
    ("year", 365 * 24 * 60 * 60),
    ("day", 24 * 60 * 60),
    ("hour", 60 * 60),
    ("minute", 60),
    ("second", 1),
];

/// Format a duration using its two most significant non-zero units.
///
/// Negative durations are treated as zero.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use warden_social::pretty_timedelta;
///
/// assert_eq!(pretty_timedelta(TimeDelta::seconds(90)), "1 minute, 30 seconds");
/// assert_eq!(pretty_timedelta(TimeDelta::zero()), "0 seconds");
/// ```
pub fn pretty_timedelta(delta: TimeDelta) -> String {
    let mut remaining = delta.num_seconds().max(0);
    let mut parts = Vec::new();

    for (name, size) in UNITS {
        let count = remaining / size;
        remaining %= size;
        if count > 0 {
            parts.push(format!("{} {}{}", count, name, if count == 1 { "" } else { "s" }));
        }
        if parts.len() == 2 {
            break;
        }
    }

    if parts.is_empty() {
        return "0 seconds".to_string();
    }
    parts.join(", ")
}

/// Format a UTC timestamp as `YYYY-MM-DD HH:MM UTC`.
pub fn pretty_datetime(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_two_most_significant_units() {
        let delta = TimeDelta::days(3) + TimeDelta::hours(2) + TimeDelta::minutes(5);
        assert_eq!(pretty_timedelta(delta), "3 days, 2 hours");
    }

    #[test]
    fn test_skips_zero_units() {
        let delta = TimeDelta::days(1) + TimeDelta::seconds(4);
        assert_eq!(pretty_timedelta(delta), "1 day, 4 seconds");
    }

    #[test]
    fn test_years() {
        let delta = TimeDelta::days(365 * 2 + 10);
        assert_eq!(pretty_timedelta(delta), "2 years, 10 days");
    }

    #[test]
    fn test_negative_is_zero() {
        assert_eq!(pretty_timedelta(TimeDelta::seconds(-30)), "0 seconds");
    }

    #[test]
    fn test_pretty_datetime() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 59)
            .unwrap();
        assert_eq!(pretty_datetime(at), "2024-03-09 07:05 UTC");
    }
}
