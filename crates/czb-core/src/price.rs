//! The price resolver: one fetch per command, one derived rate, every
//! failure collapsed at the boundary.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    config::Config,
    domain::{PoolLocator, QuoteMode},
};

/// Why a quote could not be turned into a rate.
///
/// Callers never see these: `resolve` collapses every variant to `None` so
/// the user-facing reply degrades to `N/A`. The taxonomy exists so the
/// diagnostic log still names the actual cause.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("price field is not a finite number: {0:?}")]
    NonNumeric(String),

    #[error("degenerate price ratio")]
    Degenerate,
}

#[derive(Debug, Deserialize)]
struct PoolResponse {
    data: PoolData,
}

#[derive(Debug, Deserialize)]
struct PoolData {
    attributes: PoolQuote,
}

/// The two USD-denominated prices the provider reports for a pool.
#[derive(Debug, Deserialize)]
pub struct PoolQuote {
    base_token_price_usd: PriceField,
    quote_token_price_usd: PriceField,
}

/// The provider sends prices as decimal strings; accept plain numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    fn as_f64(&self) -> Result<f64, QuoteError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| QuoteError::NonNumeric(s.clone()))?,
        };
        if !value.is_finite() {
            return Err(QuoteError::NonNumeric(value.to_string()));
        }
        Ok(value)
    }
}

/// Fetches pool quotes from the data provider and derives display rates.
pub struct PriceResolver {
    client: Client,
    base_url: String,
}

impl PriceResolver {
    pub fn new(cfg: &Config) -> crate::Result<Self> {
        let client = Client::builder().timeout(cfg.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: cfg.api_base_url.clone(),
        })
    }

    /// Resolve a pool to a displayable rate.
    ///
    /// Never fails past this boundary: any fetch, parse, or arithmetic
    /// problem is logged and collapsed to `None`. Exactly one outbound
    /// attempt per call; no retries.
    pub async fn resolve(&self, locator: &PoolLocator, mode: QuoteMode) -> Option<f64> {
        match self.fetch_rate(locator, mode).await {
            Ok(rate) => Some(rate),
            Err(err) => {
                tracing::warn!(pool = %locator, %mode, error = %err, "price fetch failed");
                None
            }
        }
    }

    async fn fetch_rate(
        &self,
        locator: &PoolLocator,
        mode: QuoteMode,
    ) -> Result<f64, QuoteError> {
        let url = format!(
            "{}/networks/{}/pools/{}",
            self.base_url, locator.network, locator.address
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status));
        }

        let body = response.text().await?;
        let parsed: PoolResponse = serde_json::from_str(&body)?;
        derive_rate(&parsed.data.attributes, mode)
    }
}

/// Derive the displayed rate from a quote.
///
/// `ratio = base / quote`. Direct mode reports the ratio; inverted mode its
/// reciprocal. A zero quote price, or a zero ratio about to be reciprocated,
/// is undefined rather than a division result.
pub fn derive_rate(quote: &PoolQuote, mode: QuoteMode) -> Result<f64, QuoteError> {
    let base = quote.base_token_price_usd.as_f64()?;
    let quote_usd = quote.quote_token_price_usd.as_f64()?;

    if quote_usd == 0.0 {
        return Err(QuoteError::Degenerate);
    }
    let ratio = base / quote_usd;

    match mode {
        QuoteMode::Direct => Ok(ratio),
        QuoteMode::Inverted => {
            if ratio == 0.0 {
                return Err(QuoteError::Degenerate);
            }
            Ok(1.0 / ratio)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(body: &str) -> PoolQuote {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn inverted_mode_reciprocates_the_ratio() {
        let q = quote(r#"{"base_token_price_usd":"2","quote_token_price_usd":"4"}"#);
        assert_eq!(derive_rate(&q, QuoteMode::Inverted).unwrap(), 2.0);
    }

    #[test]
    fn direct_mode_keeps_the_raw_ratio() {
        let q = quote(r#"{"base_token_price_usd":"3","quote_token_price_usd":"1"}"#);
        assert_eq!(derive_rate(&q, QuoteMode::Direct).unwrap(), 3.0);
    }

    #[test]
    fn accepts_number_price_fields() {
        let q = quote(r#"{"base_token_price_usd":2,"quote_token_price_usd":4.0}"#);
        assert_eq!(derive_rate(&q, QuoteMode::Inverted).unwrap(), 2.0);
    }

    #[test]
    fn zero_quote_price_is_degenerate_in_both_modes() {
        let q = quote(r#"{"base_token_price_usd":"3","quote_token_price_usd":"0"}"#);
        assert!(matches!(
            derive_rate(&q, QuoteMode::Direct),
            Err(QuoteError::Degenerate)
        ));
        assert!(matches!(
            derive_rate(&q, QuoteMode::Inverted),
            Err(QuoteError::Degenerate)
        ));
    }

    #[test]
    fn zero_base_price_cannot_be_inverted() {
        let q = quote(r#"{"base_token_price_usd":"0","quote_token_price_usd":"4"}"#);
        assert!(matches!(
            derive_rate(&q, QuoteMode::Inverted),
            Err(QuoteError::Degenerate)
        ));
        // The raw ratio itself is still well-defined.
        assert_eq!(derive_rate(&q, QuoteMode::Direct).unwrap(), 0.0);
    }

    #[test]
    fn non_numeric_prices_are_typed_failures() {
        let q = quote(r#"{"base_token_price_usd":"abc","quote_token_price_usd":"1"}"#);
        assert!(matches!(
            derive_rate(&q, QuoteMode::Direct),
            Err(QuoteError::NonNumeric(_))
        ));

        let q = quote(r#"{"base_token_price_usd":"inf","quote_token_price_usd":"1"}"#);
        assert!(matches!(
            derive_rate(&q, QuoteMode::Direct),
            Err(QuoteError::NonNumeric(_))
        ));
    }

    #[test]
    fn missing_fields_fail_at_deserialization() {
        let parsed: Result<PoolQuote, _> = serde_json::from_str(r#"{"base_token_price_usd":"1"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn full_provider_body_parses() {
        let body = r#"{
            "data": {
                "id": "bsc_0x3458ae2d9409f138a879fca6ff59cb0d397769bb",
                "type": "pool",
                "attributes": {
                    "name": "BTCB / CZKK",
                    "base_token_price_usd": "60000",
                    "quote_token_price_usd": "1"
                }
            }
        }"#;
        let parsed: PoolResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            derive_rate(&parsed.data.attributes, QuoteMode::Inverted).unwrap(),
            1.0 / 60000.0
        );
    }
}
