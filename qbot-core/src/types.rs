//! Core types: user, chat, message, route decision, and dispatch outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined, or "Unknown" when neither is set.
    /// Used in owner notifications.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => "Unknown".to_string(),
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message with user, chat, and content. Created by the transport
/// adapter on receipt, consumed by one dispatch cycle, not retained afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
}

/// Direction of the message (from user or from bot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// Routing decision for one inbound message. Exactly one variant per message;
/// the variant fully determines which sends the dispatcher attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// A registered command (e.g. /start); reply with its fixed response.
    Command { response: String },
    /// A configured key phrase was found; reply with its fixed response and
    /// notify the owner with the sender and the triggering text.
    KeyPhrase {
        reply: String,
        original_text: String,
        sender: User,
    },
    /// Neither command nor key phrase; reply with a randomly picked generic response.
    Fallback { reply: String },
}

/// Which send of a dispatch cycle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStage {
    Reply,
    OwnerNotification,
}

/// One failed send, recorded in [`DispatchOutcome::errors`].
#[derive(Debug, Clone)]
pub struct DispatchError {
    pub stage: SendStage,
    pub error: String,
}

/// Aggregated result of one dispatch cycle. The reply and the owner notification
/// are independent outcomes; `owner_notified` is `None` when no notification was
/// attempted (non-key-phrase decision, or owner id not configured).
#[derive(Debug, Clone, Default)]
pub struct DispatchOutcome {
    pub reply_sent: bool,
    pub owner_notified: Option<bool>,
    pub errors: Vec<DispatchError>,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}
