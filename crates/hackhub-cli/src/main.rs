use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hackhub", version, about = "Hackhub participant portal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Session management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Task board
    Board {
        #[command(subcommand)]
        action: commands::board::BoardAction,
    },
    /// Event countdown
    Countdown {
        #[command(subcommand)]
        action: commands::countdown::CountdownAction,
    },
    /// Team management
    Team {
        #[command(subcommand)]
        action: commands::team::TeamAction,
    },
    /// Leaderboard standings
    Leaderboard {
        #[command(subcommand)]
        action: commands::leaderboard::LeaderboardAction,
    },
    /// Mentor directory and booking
    Mentors {
        #[command(subcommand)]
        action: commands::mentors::MentorAction,
    },
    /// Participant networking hub
    Networking {
        #[command(subcommand)]
        action: commands::networking::NetworkingAction,
    },
    /// Problem statements
    Problems {
        #[command(subcommand)]
        action: commands::problems::ProblemAction,
    },
    /// Resource library
    Resources {
        #[command(subcommand)]
        action: commands::resources::ResourceAction,
    },
    /// Project submission wizard
    Submit {
        #[command(subcommand)]
        action: commands::submit::SubmitAction,
    },
    /// Announcements feed
    Announcements {
        #[command(subcommand)]
        action: commands::announcements::AnnouncementAction,
    },
    /// Certificates and shareable artifacts
    Certificates {
        #[command(subcommand)]
        action: commands::certificates::CertificateAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Board { action } => commands::board::run(action),
        Commands::Countdown { action } => commands::countdown::run(action),
        Commands::Team { action } => commands::team::run(action),
        Commands::Leaderboard { action } => commands::leaderboard::run(action),
        Commands::Mentors { action } => commands::mentors::run(action),
        Commands::Networking { action } => commands::networking::run(action),
        Commands::Problems { action } => commands::problems::run(action),
        Commands::Resources { action } => commands::resources::run(action),
        Commands::Submit { action } => commands::submit::run(action),
        Commands::Announcements { action } => commands::announcements::run(action),
        Commands::Certificates { action } => commands::certificates::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
