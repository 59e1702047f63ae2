//! Session commands: login, signup, logout, status, profile update.

use clap::Subcommand;
use hackhub_core::{ProfileUpdate, Session};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in (mock backend: any credentials are accepted)
    Login {
        /// Account email
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Signup {
        /// Display name
        name: String,
        /// Account email
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
        /// College or organisation
        #[arg(long, default_value = "")]
        college: String,
    },
    /// Clear the session
    Logout,
    /// Print the current session state as JSON
    Status,
    /// Merge fields into the current profile
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        college: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        role: Option<String>,
        /// Comma-separated skill list, replaces the stored one
        #[arg(long)]
        skills: Option<String>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open()?;

    match action {
        AuthAction::Login { email, password } => {
            let event = session.login(&email, &password)?;
            println!("Signed in as {email}");
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        AuthAction::Signup {
            name,
            email,
            password,
            college,
        } => {
            let event = session.signup(&name, &email, &password, &college)?;
            println!("Account created for {email}");
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        AuthAction::Logout => {
            let event = session.logout()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        AuthAction::Status => {
            println!("{}", serde_json::to_string_pretty(session.state())?);
        }
        AuthAction::Update {
            name,
            email,
            college,
            avatar,
            role,
            skills,
            github,
            linkedin,
            bio,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                college,
                avatar,
                role,
                skills: skills
                    .map(|s| s.split(',').map(|t| t.trim().to_string()).collect()),
                github,
                linkedin,
                bio,
            };
            let event = session.update(update)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
