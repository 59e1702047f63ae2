use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the portal produces an Event.
/// Front ends render these as notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    LoggedIn {
        email: String,
        at: DateTime<Utc>,
    },
    SignedUp {
        email: String,
        at: DateTime<Utc>,
    },
    LoggedOut {
        at: DateTime<Utc>,
    },
    ProfileUpdated {
        at: DateTime<Utc>,
    },
    CardMoved {
        card_id: String,
        from: String,
        to: String,
        at: DateTime<Utc>,
    },
    InviteSent {
        email: String,
        at: DateTime<Utc>,
    },
    InviteCodeRegenerated {
        code: String,
        at: DateTime<Utc>,
    },
    SessionBooked {
        mentor: String,
        slot: String,
        at: DateTime<Utc>,
    },
    ConnectionRequested {
        name: String,
        at: DateTime<Utc>,
    },
    ProblemLockToggled {
        problem_id: String,
        locked: bool,
        at: DateTime<Utc>,
    },
    Submitted {
        project_title: String,
        at: DateTime<Utc>,
    },
}
