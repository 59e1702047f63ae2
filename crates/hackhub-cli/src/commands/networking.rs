//! Networking hub commands.

use clap::Subcommand;
use hackhub_core::{Event, ParticipantDirectory};

#[derive(Subcommand)]
pub enum NetworkingAction {
    /// List participants, optionally filtered by skill
    List {
        /// Only participants carrying this skill tag
        #[arg(long)]
        skill: Option<String>,
    },
    /// Search participants by name or team
    Search {
        /// Search query
        query: String,
        /// Only participants carrying this skill tag
        #[arg(long)]
        skill: Option<String>,
    },
    /// Print every distinct skill in the directory
    Skills,
    /// Send a connection request to a participant
    Connect {
        /// Participant id
        id: String,
    },
}

pub fn run(action: NetworkingAction) -> Result<(), Box<dyn std::error::Error>> {
    let directory = ParticipantDirectory::seeded();

    match action {
        NetworkingAction::List { skill } => {
            let hits = directory.filter("", skill.as_deref());
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        NetworkingAction::Search { query, skill } => {
            let hits = directory.filter(&query, skill.as_deref());
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        NetworkingAction::Skills => {
            for skill in directory.all_skills() {
                println!("{skill}");
            }
        }
        NetworkingAction::Connect { id } => {
            let event = directory.connect(&id)?;
            if let Event::ConnectionRequested { ref name, .. } = event {
                println!("Connection request sent to {name}!");
            }
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
