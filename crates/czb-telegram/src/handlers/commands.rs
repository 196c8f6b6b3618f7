use std::sync::Arc;

use teloxide::{prelude::*, types::ChatAction};

use czb_core::{domain::PoolSpec, replies};

use crate::{router::AppState, send_html};

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

/// One fetch, one reply line; the resolver already collapsed failures.
async fn fetch_price_reply(
    bot: &Bot,
    msg: &Message,
    state: &AppState,
    emoji: &str,
    asset: &str,
    pool: &PoolSpec,
) -> String {
    let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;
    let rate = state.resolver.resolve(&pool.locator, pool.mode).await;
    replies::price_reply(emoji, asset, rate, &state.cfg.reference_symbol)
}

pub async fn handle_command(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let (cmd, _args) = parse_command(text);

    let reply = match cmd.as_str() {
        "start" => replies::help_text(&state.cfg),
        "btc" => fetch_price_reply(&bot, &msg, &state, "₿", "BTCB", &state.cfg.btc_pool).await,
        "usd" | "usdt" => {
            fetch_price_reply(&bot, &msg, &state, "💵", "USD", &state.cfg.usdt_pool).await
        }
        "bnb" => fetch_price_reply(&bot, &msg, &state, "⚡", "WBNB", &state.cfg.bnb_pool).await,
        other if other == replies::contract_command(&state.cfg) => {
            replies::contracts_reply(&state.cfg)
        }
        _ => return Ok(()), // not ours; stay silent
    };

    send_html(&bot, msg.chat.id, &reply).await;
    Ok(())
}
