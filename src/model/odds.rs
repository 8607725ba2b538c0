// src/model/odds.rs
use std::collections::BTreeMap;

use chrono::{Local, NaiveTime, SubsecRound};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::Bookmaker;

/// One bookmaker's price for one runner at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OddsQuote {
    #[serde(rename = "bookie")]
    pub bookmaker: String,
    /// Decimal odds.
    pub price: f64,
    /// When we read the page, not when the bookmaker last moved the price.
    #[serde(rename = "time")]
    pub captured_at: NaiveTime,
}

/// Per-runner odds keyed by bookmaker; iterates in roster order.
pub type Odds = BTreeMap<Bookmaker, OddsQuote>;

/// Wall-clock time to stamp on every quote read from one page.
pub fn capture_time() -> NaiveTime {
    Local::now().time().trunc_subsecs(0)
}

/// Best (highest) price on offer.
///
/// When several bookmakers share the top price, one of them is picked
/// uniformly at random on every call. Returns `None` only for empty odds.
pub fn select_best(odds: &Odds) -> Option<OddsQuote> {
    select_best_with(odds, &mut rand::thread_rng())
}

/// [`select_best`] with a caller-supplied RNG.
pub fn select_best_with<R: Rng + ?Sized>(odds: &Odds, rng: &mut R) -> Option<OddsQuote> {
    let max = odds.values().map(|q| q.price).fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<&OddsQuote> = odds.values().filter(|q| q.price == max).collect();
    tied.choose(rng).map(|q| (*q).clone())
}
