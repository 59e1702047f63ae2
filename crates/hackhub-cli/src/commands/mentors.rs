//! Mentor directory and booking commands.

use clap::Subcommand;
use hackhub_core::mentors::TIME_SLOTS;
use hackhub_core::{Booking, Document, MentorDirectory};

const BOOKINGS_DOC: &str = "bookings";

#[derive(Subcommand)]
pub enum MentorAction {
    /// List all mentors
    List,
    /// Search mentors by name or expertise
    Search {
        /// Search query
        query: String,
    },
    /// Print the offered time slots
    Slots,
    /// Book a session with a mentor
    Book {
        /// Mentor id
        mentor: String,
        /// Time slot, e.g. "09:00 AM"
        #[arg(long)]
        slot: String,
    },
    /// List booked sessions
    Bookings,
}

pub fn run(action: MentorAction) -> Result<(), Box<dyn std::error::Error>> {
    let directory = MentorDirectory::seeded();

    match action {
        MentorAction::List => {
            println!("{}", serde_json::to_string_pretty(&directory.mentors)?);
        }
        MentorAction::Search { query } => {
            println!("{}", serde_json::to_string_pretty(&directory.search(&query))?);
        }
        MentorAction::Slots => {
            for slot in TIME_SLOTS {
                println!("{slot}");
            }
        }
        MentorAction::Book { mentor, slot } => {
            let (booking, event) = directory.book(&mentor, &slot)?;

            let doc = Document::open(BOOKINGS_DOC)?;
            let mut bookings: Vec<Booking> = doc.load_or_default();
            bookings.push(booking);
            doc.save(&bookings)?;

            println!("Session booked with {}!", event_mentor(&event));
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        MentorAction::Bookings => {
            let doc = Document::open(BOOKINGS_DOC)?;
            let bookings: Vec<Booking> = doc.load_or_default();
            println!("{}", serde_json::to_string_pretty(&bookings)?);
        }
    }

    Ok(())
}

fn event_mentor(event: &hackhub_core::Event) -> &str {
    match event {
        hackhub_core::Event::SessionBooked { mentor, .. } => mentor,
        _ => "mentor",
    }
}
