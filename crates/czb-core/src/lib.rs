//! Core domain + application logic for the CZKK price info bot.
//!
//! This crate is intentionally framework-agnostic. The Telegram transport
//! lives behind the `czb-telegram` adapter crate.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod price;
pub mod replies;

pub use errors::{Error, Result};
