//! Event countdown commands.
//!
//! `watch` owns the 1-second tick; the timer dies with the loop, so a
//! Ctrl-C or pipe close tears everything down.

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use hackhub_core::{Config, CountdownClock};

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Print the remaining time once, as JSON
    Status,
    /// Re-print the remaining time every second until the event ends
    Watch,
}

pub fn run(action: CountdownAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let clock = CountdownClock::new(config.event.ends_at);

    match action {
        CountdownAction::Status => {
            println!("{}", serde_json::to_string_pretty(&clock.remaining_now())?);
        }
        CountdownAction::Watch => {
            println!("{} ends in:", config.event.name);
            loop {
                let parts = clock.remaining_now();
                print!(
                    "\r{:02}d {:02}h {:02}m {:02}s ",
                    parts.days, parts.hours, parts.minutes, parts.seconds
                );
                std::io::stdout().flush()?;
                if parts.is_expired {
                    println!("\nHacking has ended.");
                    break;
                }
                std::thread::sleep(Duration::from_secs(1));
            }
        }
    }

    Ok(())
}
