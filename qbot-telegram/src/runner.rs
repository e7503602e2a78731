//! REPL runner: converts teloxide messages to core Messages and hands each one
//! to the [`Dispatcher`] in its own task, so one bad message never stalls the
//! polling loop.

use std::sync::Arc;

use anyhow::Result;
use qbot_core::{init_tracing, ToCoreMessage};
use qbot_router::Dispatcher;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;
use crate::bot_adapter::TelegramBotAdapter;
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build the dispatcher, run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        key_phrases = config.router.key_phrases.len(),
        fallback_replies = config.router.fallback_replies.len(),
        owner_set = config.router.owner_id.is_some(),
        "Initializing bot"
    );

    let bot = teloxide::Bot::new(config.bot_token.clone());
    let bot = match &config.telegram_api_url {
        Some(url) => bot.set_api_url(reqwest::Url::parse(url)?),
        None => bot,
    };

    let adapter = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let dispatcher = Arc::new(Dispatcher::new(adapter, Arc::new(config.router)));

    info!("Bot started successfully");

    run_repl(bot, dispatcher).await
}

/// Runs the teloxide REPL with the given dispatcher. Non-text updates are logged
/// and skipped; every text message is dispatched in a spawned task.
pub async fn run_repl(bot: teloxide::Bot, dispatcher: Arc<Dispatcher>) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved");
        }
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let dispatcher = dispatcher.clone();

        async move {
            if msg.text().is_none() {
                info!(chat_id = msg.chat.id.0, "Received non-text message, skipping");
                return Ok(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            tokio::spawn(async move {
                let outcome = dispatcher.dispatch(&core_msg).await;
                if outcome.errors.is_empty() {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        reply_sent = outcome.reply_sent,
                        owner_notified = ?outcome.owner_notified,
                        "Dispatch finished"
                    );
                } else {
                    error!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        reply_sent = outcome.reply_sent,
                        owner_notified = ?outcome.owner_notified,
                        errors = ?outcome.errors,
                        "Dispatch finished with errors"
                    );
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
