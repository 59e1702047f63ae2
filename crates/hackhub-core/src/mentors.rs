//! Mentor directory and session booking.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::events::Event;

/// The fixed slot grid offered for every mentor.
pub const TIME_SLOTS: [&str; 6] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "02:00 PM", "03:00 PM", "04:00 PM",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub expertise: Vec<String>,
    pub availability: Availability,
}

/// A confirmed mentor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub mentor_id: String,
    pub mentor_name: String,
    pub slot: String,
    pub booked_at: chrono::DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorDirectory {
    pub mentors: Vec<Mentor>,
}

impl MentorDirectory {
    pub fn seeded() -> Self {
        fn mentor(
            id: &str,
            name: &str,
            role: &str,
            company: &str,
            expertise: &[&str],
            availability: Availability,
        ) -> Mentor {
            Mentor {
                id: id.into(),
                name: name.into(),
                role: role.into(),
                company: company.into(),
                expertise: expertise.iter().map(|e| e.to_string()).collect(),
                availability,
            }
        }

        Self {
            mentors: vec![
                mentor(
                    "m1",
                    "Dr. Meera Iyer",
                    "Principal Scientist",
                    "DeepGrid AI",
                    &["Machine Learning", "Computer Vision", "Python"],
                    Availability::Available,
                ),
                mentor(
                    "m2",
                    "James Okafor",
                    "Staff Engineer",
                    "Finlay",
                    &["Distributed Systems", "Go", "Payments"],
                    Availability::Available,
                ),
                mentor(
                    "m3",
                    "Lena Fischer",
                    "Product Director",
                    "LearnLoop",
                    &["Product Strategy", "EdTech", "Pitching"],
                    Availability::Busy,
                ),
                mentor(
                    "m4",
                    "Rohan Gupta",
                    "Security Lead",
                    "Vaultline",
                    &["AppSec", "Cryptography", "Rust"],
                    Availability::Available,
                ),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.id == id)
    }

    /// Case-insensitive search over mentor names and expertise tags.
    pub fn search(&self, query: &str) -> Vec<&Mentor> {
        let query = query.to_lowercase();
        self.mentors
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&query)
                    || m.expertise
                        .iter()
                        .any(|skill| skill.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Book a session with a mentor at one of the offered slots.
    ///
    /// # Errors
    /// Returns an error when the mentor id is unknown, the slot is not
    /// offered, or the mentor is not currently available.
    pub fn book(&self, mentor_id: &str, slot: &str) -> Result<(Booking, Event), CoreError> {
        let mentor = self.get(mentor_id).ok_or_else(|| ValidationError::UnknownEntity {
            kind: "mentor",
            id: mentor_id.to_string(),
        })?;

        if !TIME_SLOTS.contains(&slot) {
            return Err(ValidationError::Unavailable {
                kind: "time slot",
                value: slot.to_string(),
            }
            .into());
        }
        if mentor.availability != Availability::Available {
            return Err(ValidationError::Unavailable {
                kind: "mentor",
                value: mentor.name.clone(),
            }
            .into());
        }

        let booking = Booking {
            mentor_id: mentor.id.clone(),
            mentor_name: mentor.name.clone(),
            slot: slot.into(),
            booked_at: Utc::now(),
        };
        let event = Event::SessionBooked {
            mentor: mentor.name.clone(),
            slot: slot.into(),
            at: booking.booked_at,
        };
        Ok((booking, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_name_and_expertise() {
        let directory = MentorDirectory::seeded();
        assert_eq!(directory.search("meera").len(), 1);
        assert_eq!(directory.search("rust").len(), 1);
        assert!(directory.search("PYTHON").iter().any(|m| m.id == "m1"));
        assert!(directory.search("cobol").is_empty());
    }

    #[test]
    fn booking_happy_path() {
        let directory = MentorDirectory::seeded();
        let (booking, _) = directory.book("m1", "09:00 AM").unwrap();
        assert_eq!(booking.mentor_name, "Dr. Meera Iyer");
        assert_eq!(booking.slot, "09:00 AM");
    }

    #[test]
    fn booking_requires_offered_slot() {
        let directory = MentorDirectory::seeded();
        assert!(directory.book("m1", "midnight").is_err());
    }

    #[test]
    fn booking_rejects_busy_mentor() {
        let directory = MentorDirectory::seeded();
        assert!(directory.book("m3", "09:00 AM").is_err());
    }

    #[test]
    fn booking_rejects_unknown_mentor() {
        let directory = MentorDirectory::seeded();
        assert!(directory.book("m99", "09:00 AM").is_err());
    }
}
