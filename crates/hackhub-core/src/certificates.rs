//! Certificates: the award list plus the shareable artifacts (share link,
//! embeddable badge snippet, verification link) copied via [`Clipboard`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::team::Clipboard;

/// Base URL the share/badge/verify links point at.
pub const CERTIFICATE_BASE_URL: &str = "https://innohacks.tech";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    Available,
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CertificateStatus,
    /// Issue date for available certificates, "Coming soon" otherwise.
    pub date: String,
}

/// The built-in certificate list.
pub fn seeded() -> Vec<Certificate> {
    fn certificate(
        id: &str,
        title: &str,
        description: &str,
        status: CertificateStatus,
        date: &str,
    ) -> Certificate {
        Certificate {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status,
            date: date.into(),
        }
    }

    vec![
        certificate(
            "cert-1",
            "Participation Certificate",
            "Awarded for participating in InnoHacks 2.0",
            CertificateStatus::Available,
            "January 2024",
        ),
        certificate(
            "cert-2",
            "Winner Certificate",
            "Awarded to top 3 teams",
            CertificateStatus::Locked,
            "Coming soon",
        ),
        certificate(
            "cert-3",
            "Mentor Appreciation",
            "For outstanding mentorship",
            CertificateStatus::Locked,
            "Coming soon",
        ),
    ]
}

/// Shareable certificate link for a user.
pub fn share_url(user_id: &str) -> String {
    format!("{CERTIFICATE_BASE_URL}/certificate/{user_id}")
}

/// Embeddable badge snippet for a profile or portfolio page.
pub fn badge_snippet(user_id: &str) -> String {
    format!(
        r#"<img src="{CERTIFICATE_BASE_URL}/badge/{user_id}.svg" alt="InnoHacks 2.0 Participant" />"#
    )
}

/// Public verification link for a user's certificate.
pub fn verify_url(user_id: &str) -> String {
    format!("{CERTIFICATE_BASE_URL}/verify/{user_id}")
}

/// Copy the share link via the given clipboard capability.
///
/// # Errors
/// Propagates the clipboard failure so the caller can notify the user.
pub fn copy_share_url(clipboard: &mut dyn Clipboard, user_id: &str) -> Result<(), CoreError> {
    clipboard.write_text(&share_url(user_id))
}

/// Copy the badge snippet via the given clipboard capability.
///
/// # Errors
/// Propagates the clipboard failure so the caller can notify the user.
pub fn copy_badge_snippet(clipboard: &mut dyn Clipboard, user_id: &str) -> Result<(), CoreError> {
    clipboard.write_text(&badge_snippet(user_id))
}

/// Copy the verification link via the given clipboard capability.
///
/// # Errors
/// Propagates the clipboard failure so the caller can notify the user.
pub fn copy_verify_url(clipboard: &mut dyn Clipboard, user_id: &str) -> Result<(), CoreError> {
    clipboard.write_text(&verify_url(user_id))
}
