//! Problem statements: track filtering and the lock toggle.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::events::Event;

/// Competition track a problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "AI/ML")]
    AiMl,
    FinTech,
    EdTech,
}

impl Track {
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::AiMl => "AI/ML",
            Track::FinTech => "FinTech",
            Track::EdTech => "EdTech",
        }
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AI/ML" | "ai/ml" | "aiml" => Ok(Track::AiMl),
            "FinTech" | "fintech" => Ok(Track::FinTech),
            "EdTech" | "edtech" => Ok(Track::EdTech),
            other => Err(format!("invalid track: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemStatement {
    pub id: String,
    pub title: String,
    pub domain: Track,
    pub difficulty: Difficulty,
    pub description: String,
}

/// The problem list plus which statements the team has locked in.
/// Locking hides the team's choice from others; toggling again releases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemCatalog {
    pub problems: Vec<ProblemStatement>,
    #[serde(default)]
    pub locked: BTreeSet<String>,
}

impl ProblemCatalog {
    pub fn seeded() -> Self {
        fn problem(
            id: &str,
            title: &str,
            domain: Track,
            difficulty: Difficulty,
            description: &str,
        ) -> ProblemStatement {
            ProblemStatement {
                id: id.into(),
                title: title.into(),
                domain,
                difficulty,
                description: description.into(),
            }
        }

        Self {
            problems: vec![
                problem(
                    "p1",
                    "Early sepsis detection from vitals",
                    Track::AiMl,
                    Difficulty::Hard,
                    "Predict sepsis onset hours ahead using streaming ICU vitals.",
                ),
                problem(
                    "p2",
                    "Explainable loan approvals",
                    Track::FinTech,
                    Difficulty::Medium,
                    "Score loan applications with human-readable reasons per decision.",
                ),
                problem(
                    "p3",
                    "Adaptive revision planner",
                    Track::EdTech,
                    Difficulty::Easy,
                    "Build a study planner that adapts to quiz performance.",
                ),
                problem(
                    "p4",
                    "Fraud ring detection",
                    Track::FinTech,
                    Difficulty::Hard,
                    "Surface coordinated fraud across transaction graphs.",
                ),
                problem(
                    "p5",
                    "Sign-language tutor",
                    Track::AiMl,
                    Difficulty::Medium,
                    "Real-time feedback on sign-language practice from webcam input.",
                ),
                problem(
                    "p6",
                    "Peer-review matchmaking",
                    Track::EdTech,
                    Difficulty::Medium,
                    "Match student submissions to the best-suited peer reviewers.",
                ),
            ],
            locked: BTreeSet::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProblemStatement> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// Problems in a given track, seed order.
    pub fn by_track(&self, track: Track) -> Vec<&ProblemStatement> {
        self.problems.iter().filter(|p| p.domain == track).collect()
    }

    pub fn is_locked(&self, id: &str) -> bool {
        self.locked.contains(id)
    }

    /// Toggle the lock on a problem. Returns the new locked state.
    ///
    /// # Errors
    /// Returns an error when the problem id is unknown.
    pub fn toggle_lock(&mut self, id: &str) -> Result<(bool, Event), ValidationError> {
        if self.get(id).is_none() {
            return Err(ValidationError::UnknownEntity {
                kind: "problem",
                id: id.to_string(),
            });
        }

        let locked = if self.locked.remove(id) {
            false
        } else {
            self.locked.insert(id.to_string());
            true
        };
        let event = Event::ProblemLockToggled {
            problem_id: id.to_string(),
            locked,
            at: Utc::now(),
        };
        Ok((locked, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_filter() {
        let catalog = ProblemCatalog::seeded();
        let fintech = catalog.by_track(Track::FinTech);
        assert_eq!(fintech.len(), 2);
        assert!(fintech.iter().all(|p| p.domain == Track::FinTech));
    }

    #[test]
    fn track_parse_accepts_aliases() {
        assert_eq!("AI/ML".parse::<Track>().unwrap(), Track::AiMl);
        assert_eq!("fintech".parse::<Track>().unwrap(), Track::FinTech);
        assert!("BioTech".parse::<Track>().is_err());
    }

    #[test]
    fn lock_toggles_both_ways() {
        let mut catalog = ProblemCatalog::seeded();
        let (locked, _) = catalog.toggle_lock("p2").unwrap();
        assert!(locked);
        assert!(catalog.is_locked("p2"));

        let (locked, _) = catalog.toggle_lock("p2").unwrap();
        assert!(!locked);
        assert!(!catalog.is_locked("p2"));
    }

    #[test]
    fn lock_unknown_problem_fails() {
        let mut catalog = ProblemCatalog::seeded();
        assert!(catalog.toggle_lock("p99").is_err());
    }
}
