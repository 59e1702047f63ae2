//! Team commands: members, invite code, invites.

use clap::Subcommand;
use hackhub_core::team::copy_invite_code;
use hackhub_core::{Config, Document, Team};

use super::TerminalClipboard;

const TEAM_DOC: &str = "team";

#[derive(Subcommand)]
pub enum TeamAction {
    /// Print the team as JSON
    Show,
    /// Print the invite code
    Code {
        /// Also copy it to the terminal clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
    /// Replace the invite code with a fresh one
    RegenerateCode,
    /// Record an invite to the given email address
    Invite {
        /// Invitee email
        email: String,
    },
}

pub fn run(action: TeamAction) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::open(TEAM_DOC)?;
    let mut team: Team = doc.load_or_default();

    match action {
        TeamAction::Show => {
            println!("{}", serde_json::to_string_pretty(&team)?);
        }
        TeamAction::Code { copy } => {
            println!("{}", team.invite_code);
            if copy {
                match copy_invite_code(&mut TerminalClipboard, &team) {
                    Ok(()) => println!("invite code copied to clipboard"),
                    Err(e) => eprintln!("failed to copy invite code: {e}"),
                }
            }
        }
        TeamAction::RegenerateCode => {
            let prefix = Config::load_or_default().invite.code_prefix;
            let event = team.regenerate_code(&prefix);
            doc.save(&team)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TeamAction::Invite { email } => {
            let event = team.send_invite(&email)?;
            doc.save(&team)?;
            println!("Invitation sent to {email}");
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
