//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; qbot-telegram implements it via teloxide, and
//! tests substitute recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for the two send capabilities of a dispatch cycle: the user-facing
/// reply and the out-of-band owner notification.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a text message to an arbitrary recipient id (e.g. the owner's private chat).
    async fn notify_user(&self, user_id: i64, text: &str) -> Result<()>;
}
