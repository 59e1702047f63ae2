//! Announcements feed commands.

use chrono::Utc;
use clap::Subcommand;
use hackhub_core::announcements;
use hackhub_core::format::format_relative;

#[derive(Subcommand)]
pub enum AnnouncementAction {
    /// Print the feed, newest first
    List {
        /// Emit full JSON instead of the summary lines
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AnnouncementAction) -> Result<(), Box<dyn std::error::Error>> {
    let feed = announcements::seeded();

    match action {
        AnnouncementAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&feed)?);
                return Ok(());
            }
            let now = Utc::now();
            for announcement in &feed {
                println!(
                    "{} ({})\n  {}",
                    announcement.title,
                    format_relative(announcement.timestamp, now),
                    announcement.content
                );
            }
        }
    }

    Ok(())
}
