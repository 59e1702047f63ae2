//! Event announcements feed, newest first.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// The built-in seed feed, newest first.
pub fn seeded() -> Vec<Announcement> {
    fn announcement(id: &str, title: &str, content: &str, ts: (u32, u32)) -> Announcement {
        Announcement {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            timestamp: Utc
                .with_ymd_and_hms(2026, 10, 2, ts.0, ts.1, 0)
                .single()
                .unwrap_or_else(Utc::now),
        }
    }

    vec![
        announcement(
            "a1",
            "Submission portal opens at 6 PM",
            "Final submissions are accepted from 6 PM today. Late entries are not judged.",
            (14, 30),
        ),
        announcement(
            "a2",
            "Mentor office hours extended",
            "Mentors are available until 10 PM tonight. Book slots early, they fill up fast.",
            (11, 15),
        ),
        announcement(
            "a3",
            "Wi-Fi maintenance at 3 AM",
            "Expect a short network outage in Hall B during overnight maintenance.",
            (8, 0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_is_newest_first() {
        let feed = seeded();
        assert!(feed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }
}
