//! Telegram adapter (teloxide).
//!
//! Connects the command set to `czb-core`: routing, command handlers, and a
//! send helper that respects Telegram flood control.

use teloxide::prelude::*;

use tokio::time::sleep;

pub mod handlers;
pub mod router;

/// Send an HTML-formatted reply, retrying once on flood control.
///
/// Send failures are logged and swallowed: a lost reply must not take the
/// polling loop down.
pub(crate) async fn send_html(bot: &Bot, chat_id: teloxide::types::ChatId, html: &str) {
    const MAX_RETRIES: usize = 1;
    let mut attempts = 0usize;

    loop {
        let sent = bot
            .send_message(chat_id, html.to_string())
            .parse_mode(teloxide::types::ParseMode::Html)
            .await;

        match sent {
            Ok(_) => return,
            Err(teloxide::RequestError::RetryAfter(d)) if attempts < MAX_RETRIES => {
                attempts += 1;
                sleep(d).await;
            }
            Err(e) => {
                tracing::warn!(chat_id = chat_id.0, error = %e, "failed to send reply");
                return;
            }
        }
    }
}
