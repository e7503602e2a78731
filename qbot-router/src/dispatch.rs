//! Dispatch coordinator: executes the sends a [`RouteDecision`] calls for and
//! aggregates their outcomes into a [`DispatchOutcome`].
//!
//! Both sends of a key-phrase cycle are independent: a failed owner notification
//! never surfaces as a reply failure, and a failed reply does not stop the
//! notification from being attempted. `dispatch` never returns an error; the
//! polling loop continues with the next message regardless of outcome.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use qbot_core::{
    Bot, DispatchError, DispatchOutcome, Message, RouteDecision, SendStage, User,
};
use tracing::{error, info, instrument, warn};

use crate::config::RouterConfig;
use crate::select::select;

/// Formats the out-of-band notification for the owner: who triggered the key
/// phrase, with what text, and when.
pub fn owner_notification(sender: &User, original_text: &str, at: DateTime<Utc>) -> String {
    let username = sender.username.as_deref().unwrap_or("no username");
    format!(
        "Key phrase detected!\n\nUser: {}\nUser id: {}\nUsername: @{}\nMessage: {}\nTime: {}",
        sender.full_name(),
        sender.id,
        username,
        original_text,
        at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Runs one dispatch cycle per inbound message: select a route, send the reply,
/// and conditionally notify the owner. Stateless across messages; the config is
/// shared read-only.
pub struct Dispatcher {
    bot: Arc<dyn Bot>,
    config: Arc<RouterConfig>,
}

impl Dispatcher {
    pub fn new(bot: Arc<dyn Bot>, config: Arc<RouterConfig>) -> Self {
        Self { bot, config }
    }

    /// Selects the route for `message` and executes the resulting sends.
    #[instrument(skip(self, message))]
    pub async fn dispatch(&self, message: &Message) -> DispatchOutcome {
        let decision = select(message, &self.config);
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            decision = decision_name(&decision),
            "Route selected"
        );
        self.execute(message, decision).await
    }

    /// Executes the sends for an already-made decision. Split from
    /// [`Dispatcher::dispatch`] so tests can drive a fixed decision through the
    /// send path.
    pub async fn execute(&self, message: &Message, decision: RouteDecision) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        match decision {
            RouteDecision::Command { response } => {
                outcome.reply_sent = self.try_reply(message, &response, &mut outcome.errors).await;
            }
            RouteDecision::Fallback { reply } => {
                outcome.reply_sent = self.try_reply(message, &reply, &mut outcome.errors).await;
            }
            RouteDecision::KeyPhrase {
                reply,
                original_text,
                sender,
            } => {
                outcome.reply_sent = self.try_reply(message, &reply, &mut outcome.errors).await;
                self.try_notify_owner(&sender, &original_text, message.created_at, &mut outcome)
                    .await;
            }
        }

        outcome
    }

    /// Attempts the user-facing reply; records a failure instead of propagating it.
    async fn try_reply(
        &self,
        message: &Message,
        text: &str,
        errors: &mut Vec<DispatchError>,
    ) -> bool {
        match self.bot.reply_to(message, text).await {
            Ok(()) => {
                info!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    "Reply sent"
                );
                true
            }
            Err(e) => {
                error!(
                    error = %e,
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    content = %message.content,
                    "Reply send failed"
                );
                errors.push(DispatchError {
                    stage: SendStage::Reply,
                    error: e.to_string(),
                });
                false
            }
        }
    }

    /// Attempts the owner notification when an owner id is configured. Skipping
    /// (no owner id) leaves `owner_notified` as `None` and is not an error.
    async fn try_notify_owner(
        &self,
        sender: &User,
        original_text: &str,
        at: DateTime<Utc>,
        outcome: &mut DispatchOutcome,
    ) {
        let owner_id = match self.config.owner_id {
            Some(id) => id,
            None => {
                warn!(
                    user_id = sender.id,
                    "Owner notification skipped: owner id not configured"
                );
                return;
            }
        };

        let text = owner_notification(sender, original_text, at);
        match self.bot.notify_user(owner_id, &text).await {
            Ok(()) => {
                info!(owner_id, user_id = sender.id, "Owner notified");
                outcome.owner_notified = Some(true);
            }
            Err(e) => {
                error!(
                    error = %e,
                    owner_id,
                    user_id = sender.id,
                    "Owner notification failed"
                );
                outcome.errors.push(DispatchError {
                    stage: SendStage::OwnerNotification,
                    error: e.to_string(),
                });
                outcome.owner_notified = Some(false);
            }
        }
    }
}

fn decision_name(decision: &RouteDecision) -> &'static str {
    match decision {
        RouteDecision::Command { .. } => "Command",
        RouteDecision::KeyPhrase { .. } => "KeyPhrase",
        RouteDecision::Fallback { .. } => "Fallback",
    }
}

// Send-path tests with a recording mock bot live in tests/dispatch_test.rs.
