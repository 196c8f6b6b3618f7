use std::{fmt, str::FromStr};

use crate::errors::Error;

/// Network + pool address identifying a pool on the data provider.
///
/// Configuration writes these as `network/pool_address`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PoolLocator {
    pub network: String,
    pub address: String,
}

impl FromStr for PoolLocator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::Config(format!("pool locator must be network/address: {s:?}"));

        let (network, address) = s.split_once('/').ok_or_else(malformed)?;
        let network = network.trim();
        let address = address.trim();
        if network.is_empty() || address.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            network: network.to_string(),
            address: address.to_string(),
        })
    }
}

impl fmt::Display for PoolLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.address)
    }
}

/// How a pool's raw base/quote ratio maps to the displayed rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteMode {
    /// Reciprocate the raw ratio: "other asset per reference asset".
    Inverted,
    /// Use the raw ratio as-is (pool already oriented with the reference
    /// asset on the quote side).
    Direct,
}

impl FromStr for QuoteMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inverted" => Ok(Self::Inverted),
            "direct" => Ok(Self::Direct),
            other => Err(Error::Config(format!(
                "quote mode must be \"inverted\" or \"direct\": {other:?}"
            ))),
        }
    }
}

impl fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inverted => "inverted",
            Self::Direct => "direct",
        })
    }
}

/// One tracked pair: where to fetch it and how to orient the price.
#[derive(Clone, Debug)]
pub struct PoolSpec {
    pub locator: PoolLocator,
    pub mode: QuoteMode,
}

/// One row of the contract-address table shown by the contract command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractEntry {
    pub chain: String,
    pub address: String,
}
