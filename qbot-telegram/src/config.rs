//! Env-based bot configuration: Telegram connection, logging, and the routing
//! rules (key phrases, fallback replies, owner id, case sensitivity).
//!
//! Loaded once at startup; `validate()` fails fast before message processing
//! starts. Load .env first (dotenvy) so the variables are visible.

use anyhow::Result;
use qbot_router::{KeyPhrase, RouterConfig};
use std::env;

/// Key phrase used when neither KEY_PHRASES nor KEY_PHRASE is set.
const DEFAULT_KEY_PHRASE: &str = "secret";

/// Reply used when KEY_RESPONSE is not set.
const DEFAULT_KEY_RESPONSE: &str = "This is the prepared response for the key phrase!";

fn default_fallback_replies() -> Vec<String> {
    [
        "Hello! How can I help you today?",
        "Thanks for your message!",
        "I'm here if you need anything else.",
        "Have a great day!",
        "Thanks for reaching out!",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Bot config: Telegram connection, log file, routing rules.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path (LOG_FILE)
    pub log_file: String,
    /// Routing rules shared with the dispatcher.
    pub router: RouterConfig,
}

impl BotConfig {
    /// Loads the full config from environment variables. If `token` is provided
    /// it overrides BOT_TOKEN. Call validate() after load to fail fast.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN not set (required)"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/qbot.log".to_string());

        let owner_id = parse_owner_id(env::var("OWNER_ID").ok().as_deref())?;

        let key_phrases = match env::var("KEY_PHRASES") {
            Ok(raw) => parse_key_phrases(&raw)?,
            Err(_) => vec![single_key_phrase_from_env()],
        };

        let fallback_replies = match env::var("FALLBACK_REPLIES") {
            Ok(raw) => parse_fallback_replies(&raw),
            Err(_) => default_fallback_replies(),
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            router: RouterConfig::new(key_phrases, fallback_replies, owner_id),
        })
    }

    /// Validates the config (routing rules, API URL). Call before starting the
    /// REPL so a bad configuration never reaches message processing.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        self.router.validate()?;
        Ok(())
    }
}

/// Parses OWNER_ID. Unset or blank means no owner notifications; a set but
/// malformed value is a startup error rather than silently dropped.
fn parse_owner_id(raw: Option<&str>) -> Result<Option<i64>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| anyhow::anyhow!("OWNER_ID is set but not a valid integer: {}", s)),
    }
}

/// Parses KEY_PHRASES: a JSON array of {"phrase", "reply", "case_sensitive"?} objects.
fn parse_key_phrases(raw: &str) -> Result<Vec<KeyPhrase>> {
    serde_json::from_str::<Vec<KeyPhrase>>(raw).map_err(|e| {
        anyhow::anyhow!(
            "KEY_PHRASES is not a valid JSON array of {{phrase, reply, case_sensitive}} objects: {}",
            e
        )
    })
}

/// Single-phrase form: KEY_PHRASE / KEY_RESPONSE / CASE_SENSITIVE with defaults.
fn single_key_phrase_from_env() -> KeyPhrase {
    let phrase = env::var("KEY_PHRASE").unwrap_or_else(|_| DEFAULT_KEY_PHRASE.to_string());
    let reply = env::var("KEY_RESPONSE").unwrap_or_else(|_| DEFAULT_KEY_RESPONSE.to_string());
    let case_sensitive = env::var("CASE_SENSITIVE")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);
    KeyPhrase {
        phrase,
        reply,
        case_sensitive,
    }
}

/// Parses FALLBACK_REPLIES leniently: JSON array first, then comma-separated,
/// then newline-separated, otherwise one single reply. An empty result is caught
/// by validate().
fn parse_fallback_replies(raw: &str) -> Vec<String> {
    if let Ok(values) = serde_json::from_str::<Vec<String>>(raw) {
        return values;
    }
    if raw.contains(',') {
        return raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    if raw.contains('\n') {
        return raw
            .split('\n')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fallback_replies_json_array() {
        assert_eq!(
            parse_fallback_replies(r#"["Hi!", "Hey!"]"#),
            vec!["Hi!".to_string(), "Hey!".to_string()]
        );
    }

    #[test]
    fn test_parse_fallback_replies_comma_separated() {
        assert_eq!(
            parse_fallback_replies("Hi!, Hey!, "),
            vec!["Hi!".to_string(), "Hey!".to_string()]
        );
    }

    #[test]
    fn test_parse_fallback_replies_newline_separated() {
        assert_eq!(
            parse_fallback_replies("Hi!\nHey!\n"),
            vec!["Hi!".to_string(), "Hey!".to_string()]
        );
    }

    #[test]
    fn test_parse_fallback_replies_single_value_and_empty() {
        assert_eq!(parse_fallback_replies("  Hi!  "), vec!["Hi!".to_string()]);
        assert!(parse_fallback_replies("   ").is_empty());
        assert!(parse_fallback_replies("[]").is_empty());
    }

    #[test]
    fn test_parse_key_phrases_json() {
        let phrases = parse_key_phrases(
            r#"[{"phrase": "support", "reply": "We'll help!"},
                {"phrase": "QR", "reply": "Found it!", "case_sensitive": true}]"#,
        )
        .unwrap();

        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0].phrase, "support");
        assert!(!phrases[0].case_sensitive);
        assert!(phrases[1].case_sensitive);
    }

    #[test]
    fn test_parse_key_phrases_invalid_json_is_error() {
        assert!(parse_key_phrases("not json").is_err());
    }

    #[test]
    fn test_parse_owner_id() {
        assert_eq!(parse_owner_id(None).unwrap(), None);
        assert_eq!(parse_owner_id(Some("  ")).unwrap(), None);
        assert_eq!(parse_owner_id(Some("42")).unwrap(), Some(42));
        assert!(parse_owner_id(Some("not-a-number")).is_err());
    }
}
