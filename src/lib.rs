// src/lib.rs
//! Live horse-racing odds scraped from oddschecker.
//!
//! [`LiveOdds`] is the entry point: it discovers today's races from the
//! racing index, loads race pages on demand and returns owned [`Race`] values
//! carrying metadata, runners and per-bookmaker prices.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod model;
pub mod progress;
pub mod scrape;
pub mod specs;

pub use crate::config::{Bookmaker, ClientOptions};
pub use crate::core::{Fetcher, HttpFetcher};
pub use crate::error::{Error, Result};
pub use crate::model::{OddsQuote, Race, RaceKey, Runner};
pub use crate::progress::{NullProgress, Progress};
pub use crate::scrape::LiveOdds;
