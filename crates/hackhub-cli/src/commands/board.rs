//! Task board commands.

use clap::Subcommand;
use hackhub_core::{Board, Document};

const BOARD_DOC: &str = "board";

#[derive(Subcommand)]
pub enum BoardAction {
    /// Print the board
    Show {
        /// Emit full JSON instead of the column summary
        #[arg(long)]
        json: bool,
    },
    /// Move a card between columns
    Move {
        /// Card id
        card: String,
        /// Source column id
        #[arg(long)]
        from: String,
        /// Destination column id
        #[arg(long)]
        to: String,
    },
    /// Restore the seed board
    Reset,
}

fn load_board(doc: &Document) -> Board {
    doc.load_or_default()
}

pub fn run(action: BoardAction) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::open(BOARD_DOC)?;

    match action {
        BoardAction::Show { json } => {
            let board = load_board(&doc);
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                for column in &board.columns {
                    println!("{} ({})", column.title, column.count());
                    for card in &column.cards {
                        println!("  [{}] {} ({})", card.id, card.title, card.priority.as_str());
                    }
                }
                println!("total cards: {}", board.total_cards());
            }
        }
        BoardAction::Move { card, from, to } => {
            let mut board = load_board(&doc);
            match board.move_card(&card, &from, &to)? {
                Some(event) => {
                    doc.save(&board)?;
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                None => println!("card already in '{to}', nothing to do"),
            }
        }
        BoardAction::Reset => {
            doc.save(&Board::seeded())?;
            println!("board reset to seed data");
        }
    }

    Ok(())
}
