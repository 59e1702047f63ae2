//! Submission wizard commands. The draft persists between invocations.

use clap::Subcommand;
use hackhub_core::{Document, Submission, SubmissionDraft};

const DRAFT_DOC: &str = "submission_draft";
const FINAL_DOC: &str = "submission";

#[derive(Subcommand)]
pub enum SubmitAction {
    /// Print the current draft
    Show,
    /// Set draft fields
    Set {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        demo: Option<String>,
    },
    /// Add a technology tag
    AddTech {
        tech: String,
    },
    /// Remove a technology tag
    RemoveTech {
        tech: String,
    },
    /// Advance the wizard one step
    Next,
    /// Go back one wizard step
    Back,
    /// Validate and submit the project
    Finalize,
}

pub fn run(action: SubmitAction) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::open(DRAFT_DOC)?;
    let mut draft: SubmissionDraft = doc.load_or_default();

    match action {
        SubmitAction::Show => {
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        SubmitAction::Set {
            title,
            description,
            github,
            demo,
        } => {
            if let Some(title) = title {
                draft.project_title = title;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(github) = github {
                draft.github_url = github;
            }
            if let Some(demo) = demo {
                draft.demo_video = demo;
            }
            doc.save(&draft)?;
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        SubmitAction::AddTech { tech } => {
            draft.add_tech(&tech);
            doc.save(&draft)?;
            println!("{}", serde_json::to_string_pretty(&draft.tech_stack)?);
        }
        SubmitAction::RemoveTech { tech } => {
            draft.remove_tech(&tech);
            doc.save(&draft)?;
            println!("{}", serde_json::to_string_pretty(&draft.tech_stack)?);
        }
        SubmitAction::Next => {
            draft.step = draft.step.next();
            doc.save(&draft)?;
            println!("{}", serde_json::to_string_pretty(&draft.step)?);
        }
        SubmitAction::Back => {
            draft.step = draft.step.back();
            doc.save(&draft)?;
            println!("{}", serde_json::to_string_pretty(&draft.step)?);
        }
        SubmitAction::Finalize => {
            let (submission, event) = draft.submit()?;
            let final_doc = Document::open(FINAL_DOC)?;
            final_doc.save::<Submission>(&submission)?;
            println!("Project submitted successfully!");
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
