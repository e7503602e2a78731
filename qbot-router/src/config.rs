//! Routing configuration: commands, key phrases, fallback replies, owner id.
//! Transport-agnostic; loaded by qbot-telegram from the environment and shared
//! read-only (Arc) across dispatch cycles.

use qbot_core::{QbotError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Response for /start.
pub const START_RESPONSE: &str = "Hello!\n\nI'm a bot that responds to messages. Feel free to chat with me!\n\nUse /help to see available commands.";

/// Response for /help.
pub const HELP_RESPONSE: &str = "Available commands:\n/start - Start the bot\n/help - Show this help message\n\nJust send me any message and I'll respond!";

/// One configured key phrase with its fixed reply. `case_sensitive` false folds
/// both the phrase and the message to lowercase before the containment test.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyPhrase {
    pub phrase: String,
    pub reply: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Routing configuration, read-only after startup.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Command name (without slash) to fixed response.
    pub commands: HashMap<String, String>,
    /// Ordered; earlier entries win when several phrases match the same text.
    pub key_phrases: Vec<KeyPhrase>,
    /// Candidates for the random fallback reply. Must be non-empty.
    pub fallback_replies: Vec<String>,
    /// Recipient of key-phrase notifications. `None` disables them.
    pub owner_id: Option<i64>,
}

/// The built-in /start and /help commands.
pub fn default_commands() -> HashMap<String, String> {
    HashMap::from([
        ("start".to_string(), START_RESPONSE.to_string()),
        ("help".to_string(), HELP_RESPONSE.to_string()),
    ])
}

impl RouterConfig {
    /// Creates a config with the default /start and /help commands.
    pub fn new(
        key_phrases: Vec<KeyPhrase>,
        fallback_replies: Vec<String>,
        owner_id: Option<i64>,
    ) -> Self {
        Self {
            commands: default_commands(),
            key_phrases,
            fallback_replies,
            owner_id,
        }
    }

    /// Validates the config. Call before starting message processing: an empty
    /// fallback list and an empty key-phrase string (which would match every
    /// message) are both startup errors.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_replies.is_empty() {
            return Err(QbotError::Config(
                "fallback reply list is empty; at least one reply is required".to_string(),
            ));
        }
        if let Some(entry) = self.key_phrases.iter().find(|k| k.phrase.is_empty()) {
            return Err(QbotError::Config(format!(
                "key phrase with reply {:?} is empty; it would match every message",
                entry.reply
            )));
        }
        Ok(())
    }
}
