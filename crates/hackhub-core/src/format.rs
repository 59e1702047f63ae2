//! Display formatting helpers shared by front ends.

use chrono::{DateTime, Utc};

/// "Oct 2, 2026" style date.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Coarse relative time: "just now", "5 mins ago", "3 hours ago",
/// "2 days ago"; anything older than a week falls back to the date.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "just now".into();
    }
    if secs < 3_600 {
        return format!("{} mins ago", secs / 60);
    }
    if secs < 86_400 {
        return format!("{} hours ago", secs / 3_600);
    }
    if secs < 604_800 {
        return format!("{} days ago", secs / 86_400);
    }
    format_date(then)
}

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Truncate to `max` characters, appending `...` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.into();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-02T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_date(now()), "Oct 2, 2026");
    }

    #[test]
    fn relative_buckets() {
        let n = now();
        assert_eq!(format_relative(n - Duration::seconds(30), n), "just now");
        assert_eq!(format_relative(n - Duration::minutes(5), n), "5 mins ago");
        assert_eq!(format_relative(n - Duration::hours(3), n), "3 hours ago");
        assert_eq!(format_relative(n - Duration::days(2), n), "2 days ago");
        assert_eq!(format_relative(n - Duration::days(30), n), "Sep 2, 2026");
    }

    #[test]
    fn initials_cap_at_two() {
        assert_eq!(initials("Alex Chen"), "AC");
        assert_eq!(initials("Dr. Meera K Iyer"), "DM");
        assert_eq!(initials("priya"), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn truncate_only_when_needed() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a longer...");
    }
}
