use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use czb_core::{config::Config, price::PriceResolver};

use crate::handlers;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub resolver: Arc<PriceResolver>,
}

/// Start long polling and block until an external shutdown signal.
pub async fn run_polling(cfg: Arc<Config>, resolver: Arc<PriceResolver>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!(username = me.username(), "bot is running"),
        Err(e) => tracing::warn!(error = %e, "could not fetch bot identity"),
    }
    for (command, pool) in [
        ("btc", &cfg.btc_pool),
        ("usdt", &cfg.usdt_pool),
        ("bnb", &cfg.bnb_pool),
    ] {
        tracing::info!(command, pool = %pool.locator, mode = %pool.mode, "tracking pool");
    }

    let state = Arc::new(AppState { cfg, resolver });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
