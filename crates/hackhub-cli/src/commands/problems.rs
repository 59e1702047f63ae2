//! Problem statement commands.

use std::collections::BTreeSet;

use clap::Subcommand;
use hackhub_core::{Document, ProblemCatalog, Track};

const LOCKS_DOC: &str = "problem_locks";

#[derive(Subcommand)]
pub enum ProblemAction {
    /// List problem statements
    List {
        /// Filter by track (ai/ml, fintech, edtech)
        #[arg(long)]
        track: Option<String>,
    },
    /// Toggle the lock on a problem statement
    Lock {
        /// Problem id
        id: String,
    },
}

fn load_catalog(doc: &Document) -> ProblemCatalog {
    let mut catalog = ProblemCatalog::seeded();
    catalog.locked = doc.load_or_default::<BTreeSet<String>>();
    catalog
}

pub fn run(action: ProblemAction) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::open(LOCKS_DOC)?;
    let mut catalog = load_catalog(&doc);

    match action {
        ProblemAction::List { track } => match track {
            Some(raw) => {
                let track: Track = raw.parse()?;
                println!("{}", serde_json::to_string_pretty(&catalog.by_track(track))?);
            }
            None => {
                for problem in &catalog.problems {
                    let lock = if catalog.is_locked(&problem.id) { " [locked]" } else { "" };
                    println!(
                        "[{}] {} ({}, {:?}){lock}",
                        problem.id,
                        problem.title,
                        problem.domain.as_str(),
                        problem.difficulty
                    );
                }
            }
        },
        ProblemAction::Lock { id } => {
            let (locked, event) = catalog.toggle_lock(&id)?;
            doc.save(&catalog.locked)?;
            if locked {
                println!("Problem locked - other teams cannot see your choice");
            } else {
                println!("Problem unlocked");
            }
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
