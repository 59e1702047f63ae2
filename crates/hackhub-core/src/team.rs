//! Team management: members, invite codes, pending invites.
//!
//! Invite codes are generation-only; nothing in scope validates a code on
//! the joining side.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::events::Event;
use crate::session::{validate_email, TeamRole};

/// Presence indicator shown next to each member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub team_role: TeamRole,
    pub status: Presence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInvite {
    pub email: String,
    pub status: InviteStatus,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub max_members: usize,
    pub members: Vec<TeamMember>,
    pub invite_code: String,
    pub pending_invites: Vec<PendingInvite>,
    /// 0..=100, milestone completion shown as the project ring.
    pub project_progress: u8,
    pub completed_tasks: u32,
    pub total_tasks: u32,
}

impl Default for Team {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Generate a shareable invite code: `PREFIX-XXXXXX` with six uppercase
/// alphanumerics.
pub fn generate_invite_code(prefix: &str) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{prefix}-{suffix}")
}

impl Team {
    /// The built-in seed team.
    pub fn seeded() -> Self {
        fn member(id: &str, name: &str, role: &str, team_role: TeamRole, status: Presence) -> TeamMember {
            TeamMember {
                id: id.into(),
                name: name.into(),
                role: role.into(),
                team_role,
                status,
            }
        }

        Self {
            name: "CyberSynthetics".into(),
            max_members: 4,
            members: vec![
                member("1", "Alex Chen", "Full Stack Developer", TeamRole::Leader, Presence::Online),
                member("2", "Sara Kim", "ML Engineer", TeamRole::Member, Presence::Online),
                member("3", "Dev Patel", "Backend Developer", TeamRole::Member, Presence::Offline),
            ],
            invite_code: "INNOHACKS-7FK2QX".into(),
            pending_invites: Vec::new(),
            project_progress: 75,
            completed_tasks: 9,
            total_tasks: 12,
        }
    }

    /// Replace the invite code with a freshly generated one.
    pub fn regenerate_code(&mut self, prefix: &str) -> Event {
        self.invite_code = generate_invite_code(prefix);
        Event::InviteCodeRegenerated {
            code: self.invite_code.clone(),
            at: Utc::now(),
        }
    }

    /// Record an outgoing invite for the given address.
    ///
    /// # Errors
    /// Returns an error when the email is empty or malformed.
    pub fn send_invite(&mut self, email: &str) -> Result<Event, CoreError> {
        if email.is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        validate_email(email)?;

        self.pending_invites.push(PendingInvite {
            email: email.into(),
            status: InviteStatus::Sent,
            sent_at: Utc::now(),
        });
        Ok(Event::InviteSent {
            email: email.into(),
            at: Utc::now(),
        })
    }
}

/// Opaque clipboard capability. The portal only needs "write text, tell
/// me whether it worked"; failures are surfaced to the user, never fatal.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CoreError>;
}

/// Copy the team's invite code via the given clipboard capability.
///
/// # Errors
/// Propagates the clipboard failure so the caller can notify the user.
pub fn copy_invite_code(clipboard: &mut dyn Clipboard, team: &Team) -> Result<(), CoreError> {
    clipboard.write_text(&team.invite_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_code_shape() {
        let code = generate_invite_code("INNOHACKS");
        let (prefix, suffix) = code.split_once('-').unwrap();
        assert_eq!(prefix, "INNOHACKS");
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn regenerate_replaces_code() {
        let mut team = Team::seeded();
        let old = team.invite_code.clone();
        team.regenerate_code("INNOHACKS");
        assert_ne!(team.invite_code, old);
        assert!(team.invite_code.starts_with("INNOHACKS-"));
    }

    #[test]
    fn send_invite_appends_sent_entry() {
        let mut team = Team::seeded();
        team.send_invite("maya@uni.edu").unwrap();
        assert_eq!(team.pending_invites.len(), 1);
        let invite = &team.pending_invites[0];
        assert_eq!(invite.email, "maya@uni.edu");
        assert_eq!(invite.status, InviteStatus::Sent);
    }

    #[test]
    fn send_invite_rejects_bad_addresses() {
        let mut team = Team::seeded();
        assert!(team.send_invite("").is_err());
        assert!(team.send_invite("nope").is_err());
        assert!(team.pending_invites.is_empty());
    }

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), CoreError> {
            Err(CoreError::Custom("clipboard unavailable".into()))
        }
    }

    struct RecordingClipboard(Option<String>);

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), CoreError> {
            self.0 = Some(text.into());
            Ok(())
        }
    }

    #[test]
    fn clipboard_failure_is_caught_not_fatal() {
        let team = Team::seeded();
        assert!(copy_invite_code(&mut FailingClipboard, &team).is_err());

        let mut recorder = RecordingClipboard(None);
        copy_invite_code(&mut recorder, &team).unwrap();
        assert_eq!(recorder.0.as_deref(), Some(team.invite_code.as_str()));
    }
}
