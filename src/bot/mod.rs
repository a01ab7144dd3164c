//! Chat transport for the bookmark service
//!
//! This module contains:
//! - Command parsing and dispatch to the bookmark service
//! - Reply-based id lookup for `/rm`
//! - The Telegram Bot API client and polling loop

mod commands;
mod reply;
mod telegram;

pub use commands::{parse_command, Command, Dispatcher};
pub use reply::parse_reply_id;
pub use telegram::{Chat, Message, TelegramClient, Update};

use crate::storage::BookmarkStore;
use crate::title::TitleFetcher;
use crate::LinkeeperError;
use std::time::Duration;

/// Pause after a failed poll before trying again
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Handles a single update and sends the replies
///
/// Messages without text (stickers, photos, ...) are skipped. A failed send
/// is logged and does not stop the remaining replies.
pub async fn handle_update<S, F>(
    client: &TelegramClient,
    dispatcher: &Dispatcher<S, F>,
    update: &Update,
) where
    S: BookmarkStore,
    F: TitleFetcher,
{
    let Some(message) = &update.message else {
        return;
    };
    let Some(text) = message.text.as_deref() else {
        return;
    };

    tracing::info!("Message {} in chat {}: {}", message.message_id, message.chat.id, text);

    let replies = dispatcher.handle(text, message.reply_to_text()).await;
    for reply in replies {
        if let Err(e) = client.send_message(message.chat.id, &reply).await {
            tracing::error!("Failed to send reply to chat {}: {}", message.chat.id, e);
        }
    }
}

/// Polls once and handles every update received
///
/// Returns the offset to use for the next poll.
pub async fn poll_once<S, F>(
    client: &TelegramClient,
    dispatcher: &Dispatcher<S, F>,
    offset: i64,
) -> Result<i64, LinkeeperError>
where
    S: BookmarkStore,
    F: TitleFetcher,
{
    let updates = client.get_updates(offset).await?;
    let mut next_offset = offset;

    for update in &updates {
        next_offset = next_offset.max(update.update_id + 1);
        handle_update(client, dispatcher, update).await;
    }

    Ok(next_offset)
}

/// Runs the bot until Ctrl-C
///
/// Updates are handled one at a time, in order. Poll failures are logged and
/// retried after a short pause.
pub async fn run<S, F>(
    client: TelegramClient,
    dispatcher: Dispatcher<S, F>,
) -> Result<(), LinkeeperError>
where
    S: BookmarkStore,
    F: TitleFetcher,
{
    tracing::info!("Bot started, waiting for messages");
    let mut offset = 0;

    loop {
        let polled = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received, shutting down");
                return Ok(());
            }
            polled = poll_once(&client, &dispatcher, offset) => polled,
        };

        match polled {
            Ok(next_offset) => offset = next_offset,
            Err(e) => {
                tracing::warn!("Polling failed: {}", e);
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}
