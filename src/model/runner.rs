// src/model/runner.rs
use std::fmt;

use serde::Serialize;

use super::odds::{Odds, OddsQuote, select_best};
use crate::error::Result;

/// Identity columns of a race-card row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunnerCard {
    pub number: String,
    pub name: String,
    /// Empty for races without stalls (e.g. jumps).
    pub draw: String,
    pub jockey: String,
    pub form: String,
}

/// A horse in a race together with every tracked bookmaker's price.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Runner {
    #[serde(flatten)]
    card: RunnerCard,
    odds: Odds,
    best_odds: OddsQuote,
}

impl Runner {
    /// Build a runner and resolve its best price. `None` if `odds` is empty.
    pub fn new(card: RunnerCard, odds: Odds) -> Option<Self> {
        let best_odds = select_best(&odds)?;
        Some(Self { card, odds, best_odds })
    }

    pub fn number(&self) -> &str { &self.card.number }
    pub fn name(&self) -> &str { &self.card.name }
    pub fn draw(&self) -> &str { &self.card.draw }
    pub fn jockey(&self) -> &str { &self.card.jockey }
    pub fn form(&self) -> &str { &self.card.form }
    pub fn card(&self) -> &RunnerCard { &self.card }
    pub fn odds(&self) -> &Odds { &self.odds }
    pub fn best_odds(&self) -> &OddsQuote { &self.best_odds }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// `[name]` header and one `[bookmaker, price]` row per bookmaker, best price first.
    pub fn odds_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let mut quotes: Vec<&OddsQuote> = self.odds.values().collect();
        quotes.sort_by(|a, b| b.price.total_cmp(&a.price));

        let rows = quotes
            .into_iter()
            .map(|q| vec![q.bookmaker.clone(), q.price.to_string()])
            .collect();
        (vec![self.card.name.clone()], rows)
    }
}

impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draw = if self.card.draw.is_empty() { s!() } else { format!(" ({})", self.card.draw) };
        writeln!(f, "{}. {}{}", self.card.number, self.card.name, draw)?;
        writeln!(f, "({}) {}", self.card.jockey, self.card.form)?;
        writeln!(f, "Best Odds:  {} ({})", self.best_odds.price, self.best_odds.bookmaker)
    }
}
