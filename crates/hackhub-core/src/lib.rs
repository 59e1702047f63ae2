//! # Hackhub Core Library
//!
//! Core state for a hackathon participant portal. It implements a
//! CLI-first philosophy: every operation is available through the core
//! types, with the CLI binary (and any future GUI) being a thin layer
//! over the same library.
//!
//! ## Architecture
//!
//! - **Session**: explicit session object behind an [`AuthBackend`]
//!   trait, persisted as a versioned JSON document
//! - **Board**: kanban columns and the card-move state machine
//! - **Countdown**: pure remaining-time derivation; callers own the tick
//! - **Storage**: TOML configuration plus versioned JSON documents under
//!   `~/.config/hackhub`
//! - **Fixtures**: seeded team, leaderboard, mentors, networking
//!   directory, problems, resources, announcements, certificates
//!
//! ## Key Components
//!
//! - [`Session`]: login/signup/logout/update with durable state
//! - [`Board`]: card movement with conservation of cards
//! - [`CountdownClock`]: days/hours/minutes/seconds until the deadline
//! - [`Config`]: application configuration management

pub mod announcements;
pub mod board;
pub mod certificates;
pub mod countdown;
pub mod error;
pub mod events;
pub mod format;
pub mod leaderboard;
pub mod mentors;
pub mod networking;
pub mod problems;
pub mod resources;
pub mod session;
pub mod storage;
pub mod submissions;
pub mod team;

pub use board::{Board, Card, Column, Priority};
pub use certificates::{Certificate, CertificateStatus};
pub use countdown::{CountdownClock, CountdownParts};
pub use error::{AuthError, BoardError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use mentors::{Booking, Mentor, MentorDirectory};
pub use networking::{Participant, ParticipantDirectory};
pub use problems::{Difficulty, ProblemCatalog, ProblemStatement, Track};
pub use resources::{Resource, ResourceLibrary};
pub use session::{AuthBackend, MockAuthBackend, ProfileUpdate, Session, SessionState, UserProfile};
pub use storage::{Config, Document};
pub use submissions::{Step, Submission, SubmissionDraft};
pub use team::{Clipboard, Team, TeamMember};
