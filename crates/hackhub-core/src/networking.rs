//! Networking hub: a participant directory with search, skill filtering,
//! and connection requests.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::team::Presence;

/// A fellow hacker visible in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub team: String,
    pub role: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub linkedin: String,
    pub status: Presence,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantDirectory {
    pub participants: Vec<Participant>,
}

impl ParticipantDirectory {
    pub fn seeded() -> Self {
        fn participant(
            id: &str,
            name: &str,
            team: &str,
            role: &str,
            skills: &[&str],
            status: Presence,
        ) -> Participant {
            Participant {
                id: id.into(),
                name: name.into(),
                team: team.into(),
                role: role.into(),
                avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={name}"),
                skills: skills.iter().map(|s| s.to_string()).collect(),
                linkedin: format!(
                    "https://linkedin.com/in/{}",
                    name.to_lowercase().replace(' ', "")
                ),
                status,
            }
        }

        Self {
            participants: vec![
                participant(
                    "n1",
                    "Priya Nair",
                    "Neural Ninjas",
                    "ML Engineer",
                    &["Python", "PyTorch", "Computer Vision"],
                    Presence::Online,
                ),
                participant(
                    "n2",
                    "Marcus Webb",
                    "Quantum Quokkas",
                    "Frontend Developer",
                    &["React", "TypeScript", "Figma"],
                    Presence::Online,
                ),
                participant(
                    "n3",
                    "Aisha Bello",
                    "Stack Smashers",
                    "Backend Developer",
                    &["Go", "PostgreSQL", "Docker"],
                    Presence::Offline,
                ),
                participant(
                    "n4",
                    "Tomas Rivera",
                    "Bit Benders",
                    "Full Stack Developer",
                    &["React", "Node.js", "GraphQL"],
                    Presence::Online,
                ),
                participant(
                    "n5",
                    "Hana Sato",
                    "Null Pointers",
                    "Data Scientist",
                    &["Python", "Pandas", "SQL"],
                    Presence::Offline,
                ),
                participant(
                    "n6",
                    "Felix Braun",
                    "Lambda Lords",
                    "DevOps Engineer",
                    &["Kubernetes", "Terraform", "Go"],
                    Presence::Online,
                ),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Every distinct skill across the directory, first-seen order.
    pub fn all_skills(&self) -> Vec<&str> {
        let mut skills: Vec<&str> = Vec::new();
        for participant in &self.participants {
            for skill in &participant.skills {
                if !skills.contains(&skill.as_str()) {
                    skills.push(skill);
                }
            }
        }
        skills
    }

    /// Case-insensitive search over participant names and team names.
    pub fn search(&self, query: &str) -> Vec<&Participant> {
        self.filter(query, None)
    }

    /// Participants carrying the given skill (exact tag match).
    pub fn filter_by_skill(&self, skill: &str) -> Vec<&Participant> {
        self.filter("", Some(skill))
    }

    /// Combined search + skill filter. An empty query matches everyone;
    /// `None` skill applies no skill constraint.
    pub fn filter(&self, query: &str, skill: Option<&str>) -> Vec<&Participant> {
        let query = query.to_lowercase();
        self.participants
            .iter()
            .filter(|p| {
                let matches_search = query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.team.to_lowercase().contains(&query);
                let matches_skill =
                    skill.map_or(true, |s| p.skills.iter().any(|tag| tag == s));
                matches_search && matches_skill
            })
            .collect()
    }

    /// Send a connection request to a participant.
    ///
    /// # Errors
    /// Returns an error when the participant id is unknown.
    pub fn connect(&self, id: &str) -> Result<Event, ValidationError> {
        let participant = self.get(id).ok_or_else(|| ValidationError::UnknownEntity {
            kind: "participant",
            id: id.to_string(),
        })?;
        Ok(Event::ConnectionRequested {
            name: participant.name.clone(),
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_name_and_team() {
        let directory = ParticipantDirectory::seeded();
        assert_eq!(directory.search("priya").len(), 1);
        assert_eq!(directory.search("NINJAS").len(), 1);
        assert!(directory.search("cobol").is_empty());
    }

    #[test]
    fn skill_filter_is_exact() {
        let directory = ParticipantDirectory::seeded();
        let go = directory.filter_by_skill("Go");
        assert_eq!(go.len(), 2);
        assert!(go.iter().all(|p| p.skills.iter().any(|s| s == "Go")));
        assert!(directory.filter_by_skill("go").is_empty());
    }

    #[test]
    fn combined_filter_intersects() {
        let directory = ParticipantDirectory::seeded();
        let hits = directory.filter("quokkas", Some("React"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "n2");
        assert!(directory.filter("quokkas", Some("Go")).is_empty());
    }

    #[test]
    fn all_skills_dedups_in_first_seen_order() {
        let directory = ParticipantDirectory::seeded();
        let skills = directory.all_skills();
        assert_eq!(skills[0], "Python");
        assert_eq!(
            skills.iter().filter(|s| **s == "React").count(),
            1
        );
    }

    #[test]
    fn connect_names_the_participant() {
        let directory = ParticipantDirectory::seeded();
        let event = directory.connect("n3").unwrap();
        match event {
            Event::ConnectionRequested { name, .. } => assert_eq!(name, "Aisha Bello"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn connect_unknown_participant_fails() {
        let directory = ParticipantDirectory::seeded();
        assert!(directory.connect("n99").is_err());
    }
}
