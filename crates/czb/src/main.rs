use std::sync::Arc;

use czb_core::{config::Config, price::PriceResolver};

#[tokio::main]
async fn main() -> Result<(), czb_core::Error> {
    czb_core::logging::init("czb")?;

    let cfg = Arc::new(Config::load()?);
    let resolver = Arc::new(PriceResolver::new(&cfg)?);

    czb_telegram::router::run_polling(cfg, resolver)
        .await
        .map_err(|e| czb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
