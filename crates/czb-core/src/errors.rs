/// Core error type for the bot.
///
/// The adapter crate maps transport failures into this type so startup and
/// shutdown paths handle them consistently. Per-request fetch failures never
/// surface here; they collapse inside the price resolver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
