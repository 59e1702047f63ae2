//! Project submission wizard.
//!
//! A draft moves through three steps (details, links, team). The draft is
//! persisted between edits; finalizing validates the required fields and
//! produces an immutable submission record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Details,
    Links,
    Team,
}

impl Step {
    /// Advance one step, saturating at the last.
    pub fn next(self) -> Step {
        match self {
            Step::Details => Step::Links,
            Step::Links | Step::Team => Step::Team,
        }
    }

    /// Go back one step, saturating at the first.
    pub fn back(self) -> Step {
        match self {
            Step::Team => Step::Links,
            Step::Links | Step::Details => Step::Details,
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::Details
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub project_title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_url: String,
    pub demo_video: String,
    #[serde(default)]
    pub step: Step,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self {
            project_title: "CyberSynthetics AI".into(),
            description: String::new(),
            tech_stack: vec!["React".into(), "Node.js".into(), "Python".into()],
            github_url: String::new(),
            demo_video: String::new(),
            step: Step::Details,
        }
    }
}

/// A finalized submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub project_title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_url: String,
    pub demo_video: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionDraft {
    /// Add a technology tag. Empty and duplicate entries are ignored.
    pub fn add_tech(&mut self, tech: &str) {
        if !tech.is_empty() && !self.tech_stack.iter().any(|t| t == tech) {
            self.tech_stack.push(tech.into());
        }
    }

    pub fn remove_tech(&mut self, tech: &str) {
        self.tech_stack.retain(|t| t != tech);
    }

    /// Validate required fields and finalize the draft.
    ///
    /// # Errors
    /// Returns an error naming the first missing required field.
    pub fn submit(&self) -> Result<(Submission, Event), CoreError> {
        if self.project_title.is_empty() {
            return Err(ValidationError::MissingField("project title").into());
        }
        if self.description.is_empty() {
            return Err(ValidationError::MissingField("description").into());
        }
        if self.github_url.is_empty() {
            return Err(ValidationError::MissingField("github url").into());
        }

        let submitted_at = Utc::now();
        let submission = Submission {
            project_title: self.project_title.clone(),
            description: self.description.clone(),
            tech_stack: self.tech_stack.clone(),
            github_url: self.github_url.clone(),
            demo_video: self.demo_video.clone(),
            submitted_at,
        };
        let event = Event::Submitted {
            project_title: self.project_title.clone(),
            at: submitted_at,
        };
        Ok((submission, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_saturate_at_both_ends() {
        assert_eq!(Step::Details.back(), Step::Details);
        assert_eq!(Step::Details.next(), Step::Links);
        assert_eq!(Step::Links.next(), Step::Team);
        assert_eq!(Step::Team.next(), Step::Team);
        assert_eq!(Step::Team.back(), Step::Links);
    }

    #[test]
    fn add_tech_dedups_and_skips_empty() {
        let mut draft = SubmissionDraft::default();
        let len = draft.tech_stack.len();
        draft.add_tech("React");
        draft.add_tech("");
        assert_eq!(draft.tech_stack.len(), len);
        draft.add_tech("Rust");
        assert_eq!(draft.tech_stack.last().unwrap(), "Rust");
    }

    #[test]
    fn remove_tech() {
        let mut draft = SubmissionDraft::default();
        draft.remove_tech("React");
        assert!(!draft.tech_stack.iter().any(|t| t == "React"));
    }

    #[test]
    fn submit_requires_all_fields() {
        let mut draft = SubmissionDraft::default();
        assert!(draft.submit().is_err()); // description missing

        draft.description = "AI copilot for incident response".into();
        assert!(draft.submit().is_err()); // github url missing

        draft.github_url = "https://github.com/cybersynthetics/demo".into();
        let (submission, _) = draft.submit().unwrap();
        assert_eq!(submission.project_title, "CyberSynthetics AI");
    }
}
