use std::{env, fs, path::Path, time::Duration};

use crate::{
    domain::{ContractEntry, PoolSpec, QuoteMode},
    errors::Error,
    Result,
};

const DEFAULT_API_BASE_URL: &str = "https://api.geckoterminal.com/api/v2";

/// Typed configuration for the bot.
///
/// Everything deployment-specific (credential, pool locators, contract
/// table) comes from the environment, with `.env` support. The loaded value
/// is passed explicitly into the resolver and handlers; there are no
/// module-scope tables.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,

    // Tracked pairs
    pub btc_pool: PoolSpec,
    pub usdt_pool: PoolSpec,
    pub bnb_pool: PoolSpec,

    // Reference asset
    pub reference_symbol: String,
    pub contracts: Vec<ContractEntry>,

    // Data provider
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Any missing or malformed required value is fatal: the process must
    /// not start polling with a partial config.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = require_env("TELEGRAM_BOT_TOKEN")?;

        // The mode mapping is deliberately per-pool configuration: the
        // provider's base/quote orientation differs between pools and has
        // flipped between deployments of the same pair.
        let btc_pool = pool_spec("BTC_POOL", "BTC_POOL_MODE")?;
        let usdt_pool = pool_spec("USDT_POOL", "USDT_POOL_MODE")?;
        let bnb_pool = pool_spec("BNB_POOL", "BNB_POOL_MODE")?;

        let reference_symbol = env_str("REFERENCE_SYMBOL")
            .and_then(non_empty)
            .unwrap_or_else(|| "CZKK".to_string());

        let contracts = parse_contract_table(&require_env("CONTRACT_ADDRESSES")?)?;

        let api_base_url = env_str("POOL_API_BASE_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = Duration::from_secs(env_u64("REQUEST_TIMEOUT_SECS").unwrap_or(10));

        Ok(Self {
            telegram_bot_token,
            btc_pool,
            usdt_pool,
            bnb_pool,
            reference_symbol,
            contracts,
            api_base_url,
            request_timeout,
        })
    }
}

fn pool_spec(locator_key: &str, mode_key: &str) -> Result<PoolSpec> {
    let locator = require_env(locator_key)?.parse()?;
    let mode = match env_str(mode_key).and_then(non_empty) {
        Some(raw) => raw.parse()?,
        None => QuoteMode::Inverted,
    };
    Ok(PoolSpec { locator, mode })
}

/// Ordered `Chain=address` pairs, comma-separated. Order is preserved; it is
/// the order the contract command lists chains in.
fn parse_contract_table(raw: &str) -> Result<Vec<ContractEntry>> {
    let mut out: Vec<ContractEntry> = Vec::new();

    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let Some((chain, address)) = part.split_once('=') else {
            return Err(Error::Config(format!(
                "contract entry must be Chain=address: {part:?}"
            )));
        };
        let chain = chain.trim();
        let address = address.trim();
        if chain.is_empty() || address.is_empty() {
            return Err(Error::Config(format!(
                "contract entry must be Chain=address: {part:?}"
            )));
        }
        if out.iter().any(|e| e.chain == chain) {
            return Err(Error::Config(format!("duplicate contract chain: {chain:?}")));
        }

        out.push(ContractEntry {
            chain: chain.to_string(),
            address: address.to_string(),
        });
    }

    if out.is_empty() {
        return Err(Error::Config(
            "CONTRACT_ADDRESSES must list at least one Chain=address entry".to_string(),
        ));
    }
    Ok(out)
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn require_env(key: &str) -> Result<String> {
    env_str(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.trim().to_string())
    }
}
