//! Certificate commands: listing plus the shareable artifacts.

use clap::Subcommand;
use hackhub_core::certificates::{self, CertificateStatus};
use hackhub_core::Session;

use super::TerminalClipboard;

#[derive(Subcommand)]
pub enum CertificateAction {
    /// List certificates
    List {
        /// Emit full JSON instead of the summary lines
        #[arg(long)]
        json: bool,
    },
    /// Print the shareable certificate link
    Share {
        /// Also copy it to the terminal clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
    /// Print the embeddable badge snippet
    Badge {
        /// Also copy it to the terminal clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
    /// Print the public verification link
    Verify {
        /// Also copy it to the terminal clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
}

/// Signed-out users still get working guest links.
fn current_user_id() -> Result<String, Box<dyn std::error::Error>> {
    let session = Session::open()?;
    Ok(session
        .profile()
        .map(|p| p.id.clone())
        .unwrap_or_else(|| "guest".to_string()))
}

fn report_copy(result: Result<(), hackhub_core::CoreError>, what: &str) {
    match result {
        Ok(()) => println!("{what} copied to clipboard"),
        Err(e) => eprintln!("failed to copy {what}: {e}"),
    }
}

pub fn run(action: CertificateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CertificateAction::List { json } => {
            let certs = certificates::seeded();
            if json {
                println!("{}", serde_json::to_string_pretty(&certs)?);
                return Ok(());
            }
            for cert in &certs {
                let lock = match cert.status {
                    CertificateStatus::Available => "",
                    CertificateStatus::Locked => " [locked]",
                };
                println!("[{}] {} ({}){lock}", cert.id, cert.title, cert.date);
            }
        }
        CertificateAction::Share { copy } => {
            let user_id = current_user_id()?;
            println!("{}", certificates::share_url(&user_id));
            if copy {
                report_copy(
                    certificates::copy_share_url(&mut TerminalClipboard, &user_id),
                    "shareable link",
                );
            }
        }
        CertificateAction::Badge { copy } => {
            let user_id = current_user_id()?;
            println!("{}", certificates::badge_snippet(&user_id));
            if copy {
                report_copy(
                    certificates::copy_badge_snippet(&mut TerminalClipboard, &user_id),
                    "badge code",
                );
            }
        }
        CertificateAction::Verify { copy } => {
            let user_id = current_user_id()?;
            println!("{}", certificates::verify_url(&user_id));
            if copy {
                report_copy(
                    certificates::copy_verify_url(&mut TerminalClipboard, &user_id),
                    "verification link",
                );
            }
        }
    }

    Ok(())
}
