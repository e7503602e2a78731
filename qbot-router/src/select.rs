//! Responder selector: pure decision from (message, config) to [`RouteDecision`].
//!
//! Priority order: command, then key phrases in configured order, then random
//! fallback. Only the fallback pick is non-deterministic.

use qbot_core::{Message, RouteDecision};
use rand::seq::IndexedRandom;

use crate::config::{KeyPhrase, RouterConfig};

/// Extracts the command name when the whole trimmed text is a slash command
/// (`/start`, or `/start@SomeBot` as sent in group chats). Returns `None` for
/// anything else, including commands followed by arguments.
pub fn parse_command(text: &str) -> Option<&str> {
    let token = text.trim().strip_prefix('/')?;
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    let name = match token.find('@') {
        Some(at) => &token[..at],
        None => token,
    };
    if name.is_empty() {
        return None;
    }
    Some(name)
}

fn contains_phrase(text: &str, entry: &KeyPhrase) -> bool {
    if entry.case_sensitive {
        text.contains(&entry.phrase)
    } else {
        text.to_lowercase().contains(&entry.phrase.to_lowercase())
    }
}

/// Routes one inbound message.
///
/// 1. A registered command token resolves to [`RouteDecision::Command`];
///    unrecognized commands fall through and are treated as ordinary text.
/// 2. The first configured key phrase contained in the text (respecting its
///    case flag) resolves to [`RouteDecision::KeyPhrase`].
/// 3. Otherwise a uniformly random fallback reply is picked.
///
/// Empty text matches no command and no key phrase, so it always resolves to
/// [`RouteDecision::Fallback`].
pub fn select(message: &Message, config: &RouterConfig) -> RouteDecision {
    if let Some(name) = parse_command(&message.content) {
        if let Some(response) = config.commands.get(name) {
            return RouteDecision::Command {
                response: response.clone(),
            };
        }
    }

    for entry in &config.key_phrases {
        if contains_phrase(&message.content, entry) {
            return RouteDecision::KeyPhrase {
                reply: entry.reply.clone(),
                original_text: message.content.clone(),
                sender: message.user.clone(),
            };
        }
    }

    let reply = config
        .fallback_replies
        .choose(&mut rand::rng())
        .cloned()
        .unwrap_or_default();
    RouteDecision::Fallback { reply }
}

// Scenario tests live in tests/select_test.rs; unit tests here cover the command parser only.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_plain() {
        assert_eq!(parse_command("/start"), Some("start"));
        assert_eq!(parse_command("  /help  "), Some("help"));
    }

    #[test]
    fn test_parse_command_with_bot_suffix() {
        assert_eq!(parse_command("/start@MyBot"), Some("start"));
    }

    #[test]
    fn test_parse_command_rejects_non_commands() {
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("/@MyBot"), None);
        assert_eq!(parse_command("/start now"), None);
        assert_eq!(parse_command(""), None);
    }
}
