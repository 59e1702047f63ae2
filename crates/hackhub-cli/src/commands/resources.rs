//! Resource library commands.

use clap::Subcommand;
use hackhub_core::ResourceLibrary;

#[derive(Subcommand)]
pub enum ResourceAction {
    /// List all resources
    List,
    /// Search resources by title
    Search {
        /// Search query
        query: String,
    },
}

pub fn run(action: ResourceAction) -> Result<(), Box<dyn std::error::Error>> {
    let library = ResourceLibrary::seeded();

    match action {
        ResourceAction::List => {
            println!("{}", serde_json::to_string_pretty(&library.resources)?);
        }
        ResourceAction::Search { query } => {
            println!("{}", serde_json::to_string_pretty(&library.search(&query))?);
        }
    }

    Ok(())
}
