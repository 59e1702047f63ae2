pub mod announcements;
pub mod auth;
pub mod board;
pub mod certificates;
pub mod config;
pub mod countdown;
pub mod leaderboard;
pub mod mentors;
pub mod networking;
pub mod problems;
pub mod resources;
pub mod submit;
pub mod team;

use base64::Engine;
use hackhub_core::{Clipboard, CoreError};

/// Clipboard capability backed by the OSC 52 terminal escape. Terminals
/// without OSC 52 support silently ignore the sequence; a failed stdout
/// write is the only reportable failure.
pub(crate) struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CoreError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        print!("\x1b]52;c;{encoded}\x07");
        use std::io::Write;
        std::io::stdout().flush().map_err(CoreError::Io)
    }
}
