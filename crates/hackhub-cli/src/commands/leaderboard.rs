//! Leaderboard commands.

use clap::Subcommand;
use hackhub_core::{Config, Leaderboard};

#[derive(Subcommand)]
pub enum LeaderboardAction {
    /// Print the podium and the standings table
    Show {
        /// Emit full JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Print one page of the standings
    Page {
        /// 1-based page number
        number: usize,
    },
}

fn print_entry(entry: &hackhub_core::LeaderboardEntry) {
    let marker = if entry.is_my_team { "  <- your team" } else { "" };
    println!(
        "#{:<3} {:<20} {:>4} pts  trend {:+}{marker}",
        entry.rank, entry.team, entry.points, entry.trend
    );
}

pub fn run(action: LeaderboardAction) -> Result<(), Box<dyn std::error::Error>> {
    let board = Leaderboard::seeded();

    match action {
        LeaderboardAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
                return Ok(());
            }
            println!("-- podium --");
            for entry in board.top_three() {
                print_entry(entry);
            }
            println!("-- standings --");
            for entry in board.standings() {
                print_entry(entry);
            }
        }
        LeaderboardAction::Page { number } => {
            let per_page = Config::load_or_default().leaderboard.page_size;
            let page = board.page(number, per_page);
            if page.is_empty() {
                println!("no teams on page {number}");
                return Ok(());
            }
            for entry in page {
                print_entry(entry);
            }
        }
    }

    Ok(())
}
