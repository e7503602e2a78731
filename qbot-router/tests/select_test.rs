//! Integration tests for [`qbot_router::select`].
//!
//! Covers: command priority over key phrases, unrecognized commands falling
//! through, key-phrase case sensitivity, first-match tie-break, and fallback
//! selection from the configured list.

use chrono::Utc;
use qbot_core::{Chat, Message, MessageDirection, RouteDecision, User};
use qbot_router::{select, KeyPhrase, RouterConfig};

fn make_message(content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

fn phrase(phrase: &str, reply: &str, case_sensitive: bool) -> KeyPhrase {
    KeyPhrase {
        phrase: phrase.to_string(),
        reply: reply.to_string(),
        case_sensitive,
    }
}

fn make_config(key_phrases: Vec<KeyPhrase>) -> RouterConfig {
    RouterConfig::new(
        key_phrases,
        vec!["Hi!".to_string(), "Hey!".to_string()],
        Some(789),
    )
}

/// **Test: A registered command resolves to Command with the configured response,
/// independent of key-phrase configuration.**
///
/// **Setup:** Config with a key phrase "start" that would also match the text.
/// **Action:** `select` on "/start".
/// **Expected:** Command with the /start response, not the key-phrase reply.
#[test]
fn select_command_wins_over_key_phrase() {
    let config = make_config(vec![phrase("start", "phrase reply", false)]);
    let decision = select(&make_message("/start"), &config);

    match decision {
        RouteDecision::Command { response } => {
            assert_eq!(response, config.commands["start"]);
        }
        other => panic!("expected Command, got {:?}", other),
    }
}

/// **Test: An unrecognized command token falls through to key-phrase matching.**
#[test]
fn select_unknown_command_falls_through() {
    let config = make_config(vec![phrase("settings", "Settings are not a thing here.", false)]);
    let decision = select(&make_message("/settings"), &config);

    assert_eq!(
        decision,
        RouteDecision::KeyPhrase {
            reply: "Settings are not a thing here.".to_string(),
            original_text: "/settings".to_string(),
            sender: make_message("/settings").user,
        }
    );
}

/// **Test: An unrecognized command with no matching phrase resolves to Fallback.**
#[test]
fn select_unknown_command_without_phrase_is_fallback() {
    let config = make_config(vec![phrase("support", "We'll help!", false)]);
    let decision = select(&make_message("/unknown"), &config);

    assert!(matches!(decision, RouteDecision::Fallback { .. }));
}

/// **Test: Case-insensitive phrase matches regardless of case; the decision
/// carries the reply, the original text, and the sender.**
///
/// **Setup:** Phrase "support" (case-insensitive), message "I need Support please".
/// **Expected:** KeyPhrase with reply "We'll help!" and the untouched original text.
#[test]
fn select_key_phrase_case_insensitive() {
    let config = make_config(vec![phrase("support", "We'll help!", false)]);
    let message = make_message("I need Support please");
    let decision = select(&message, &config);

    assert_eq!(
        decision,
        RouteDecision::KeyPhrase {
            reply: "We'll help!".to_string(),
            original_text: "I need Support please".to_string(),
            sender: message.user,
        }
    );
}

/// **Test: Case-sensitive phrase "Hello" does not match "hello world"; the
/// case-insensitive flag makes it match.**
#[test]
fn select_key_phrase_case_sensitive_flag() {
    let sensitive = make_config(vec![phrase("Hello", "greeting", true)]);
    let decision = select(&make_message("hello world"), &sensitive);
    assert!(matches!(decision, RouteDecision::Fallback { .. }));

    let insensitive = make_config(vec![phrase("Hello", "greeting", false)]);
    let decision = select(&make_message("hello world"), &insensitive);
    assert!(matches!(decision, RouteDecision::KeyPhrase { .. }));
}

/// **Test: When two phrases match the same text, the earlier configured entry wins.**
#[test]
fn select_first_matching_phrase_wins() {
    let config = make_config(vec![
        phrase("quest", "first reply", false),
        phrase("mega quest", "second reply", false),
    ]);
    let decision = select(&make_message("I finished the MEGA quest"), &config);

    match decision {
        RouteDecision::KeyPhrase { reply, .. } => assert_eq!(reply, "first reply"),
        other => panic!("expected KeyPhrase, got {:?}", other),
    }
}

/// **Test: No command and no phrase resolves to Fallback; the reply is always an
/// element of the configured fallback list.**
#[test]
fn select_fallback_reply_is_from_configured_list() {
    let config = make_config(vec![phrase("support", "We'll help!", false)]);

    for _ in 0..20 {
        let decision = select(&make_message("nothing to see here"), &config);
        match decision {
            RouteDecision::Fallback { reply } => {
                assert!(config.fallback_replies.contains(&reply));
            }
            other => panic!("expected Fallback, got {:?}", other),
        }
    }
}

/// **Test: Empty text matches no command and no phrase; it resolves to Fallback.**
#[test]
fn select_empty_text_is_fallback() {
    let config = make_config(vec![phrase("support", "We'll help!", false)]);
    let decision = select(&make_message(""), &config);

    assert!(matches!(decision, RouteDecision::Fallback { .. }));
}
