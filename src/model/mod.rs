// src/model/mod.rs
//! Race, runner and odds values handed back to callers.
//! Built once per page read and never mutated afterwards.

pub mod odds;
pub mod race;
pub mod runner;

pub use odds::{Odds, OddsQuote, capture_time, select_best, select_best_with};
pub use race::{Race, RaceKey, RaceMetadata};
pub use runner::{Runner, RunnerCard};
