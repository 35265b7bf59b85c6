//! Display implementation for taskboard application messages.
//!
//! Converts structured [`Message`](super::Message) values into the text shown
//! to users. All user-facing message text lives here, in one place, so that
//! wording stays consistent and messages with parameters are formatted
//! through typed interpolation rather than ad-hoc `format!` calls scattered
//! through the commands.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseInitialized => "Database initialized".to_string(),
            Message::DatabaseReset => "Database reset to its default state".to_string(),
            Message::ConfirmDatabaseReset => "Delete ALL tasks and categories and restore the default category set?".to_string(),
            Message::ResetCancelled => "Reset cancelled".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerListening(addr) => format!("Listening on http://{}", addr),

            // === GENERAL MESSAGES ===
            Message::FatalError(err) => format!("Fatal error: {}", err),
        };

        write!(f, "{}", text)
    }
}
