//! User-facing reply text.
//!
//! Pure string builders, so the exact replies are testable without a bot or
//! a network. All output targets Telegram HTML parse mode.

use crate::{
    config::Config,
    formatting::{escape_html, format_price},
};

/// The command name that lists contract addresses (`czkk` by default).
pub fn contract_command(cfg: &Config) -> String {
    cfg.reference_symbol.to_lowercase()
}

/// `/start` welcome + command listing.
pub fn help_text(cfg: &Config) -> String {
    let reference = escape_html(&cfg.reference_symbol);
    let contract_cmd = contract_command(cfg);
    format!(
        "💱 Welcome to the {reference} info bot\n\n\
         Use the following commands:\n\
         /btc - BTCB price in {reference}\n\
         /usdt - USDT price in {reference}\n\
         /bnb - WBNB price in {reference}\n\
         /{contract_cmd} - {reference} token contract addresses"
    )
}

/// One price line, e.g. `₿ BTCB price: 0.0000 CZKK`.
pub fn price_reply(emoji: &str, asset: &str, rate: Option<f64>, reference: &str) -> String {
    format!("{emoji} {asset} price: {} {reference}", format_price(rate))
}

/// The contract-address block: one chain per entry, in configured order.
pub fn contracts_reply(cfg: &Config) -> String {
    let mut out = format!(
        "🦁 <b>{} Contract Addresses:</b>",
        escape_html(&cfg.reference_symbol)
    );
    for entry in &cfg.contracts {
        out.push_str(&format!(
            "\n\n<b>{}</b>:\n<code>{}</code>",
            escape_html(&entry.chain),
            escape_html(&entry.address)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{ContractEntry, PoolLocator, PoolSpec, QuoteMode};

    fn test_config() -> Config {
        let pool = |address: &str| PoolSpec {
            locator: PoolLocator {
                network: "bsc".to_string(),
                address: address.to_string(),
            },
            mode: QuoteMode::Inverted,
        };

        Config {
            telegram_bot_token: "123:token".to_string(),
            btc_pool: pool("0x3458ae2d9409f138a879fca6ff59cb0d397769bb"),
            usdt_pool: pool("0x06313b57eac23e0c005a76f81972175c7e8f42ef"),
            bnb_pool: pool("0x862c173c27cbe6a29ec495f4a2cba4fe21da9689"),
            reference_symbol: "CZKK".to_string(),
            contracts: vec![
                ContractEntry {
                    chain: "Binance Smart Chain (BSC)".to_string(),
                    address: "0xd5defcb306d93d4cd5dd59e66c8d4dc3b74ef096".to_string(),
                },
                ContractEntry {
                    chain: "Ethereum".to_string(),
                    address: "0x5dBbD676f70cF9Aac23b25A28e841239fa8d2685".to_string(),
                },
            ],
            api_base_url: "https://api.geckoterminal.com/api/v2".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }

    #[test]
    fn btc_reply_matches_expected_text() {
        // base 60000 / quote 1, inverted: 1/60000, which rounds to 0.0000.
        let rate = Some(1.0 / 60000.0);
        assert_eq!(
            price_reply("₿", "BTCB", rate, "CZKK"),
            "₿ BTCB price: 0.0000 CZKK"
        );
    }

    #[test]
    fn failed_fetch_replies_na() {
        assert_eq!(
            price_reply("💵", "USD", None, "CZKK"),
            "💵 USD price: N/A CZKK"
        );
    }

    #[test]
    fn help_lists_every_command() {
        let help = help_text(&test_config());
        for cmd in ["/btc", "/usdt", "/bnb", "/czkk"] {
            assert!(help.contains(cmd), "missing {cmd}");
        }
    }

    #[test]
    fn contract_block_lists_each_chain_once_in_order() {
        let cfg = test_config();
        let reply = contracts_reply(&cfg);

        assert!(reply.starts_with("🦁 <b>CZKK Contract Addresses:</b>"));
        assert_eq!(reply.matches("<code>").count(), cfg.contracts.len());

        let bsc = reply.find("Binance Smart Chain (BSC)").unwrap();
        let eth = reply.find("Ethereum").unwrap();
        assert!(bsc < eth);
        assert!(reply.contains("<code>0xd5defcb306d93d4cd5dd59e66c8d4dc3b74ef096</code>"));
    }

    #[test]
    fn contract_command_follows_reference_symbol() {
        let mut cfg = test_config();
        assert_eq!(contract_command(&cfg), "czkk");

        cfg.reference_symbol = "WXYZ".to_string();
        assert_eq!(contract_command(&cfg), "wxyz");
    }
}
