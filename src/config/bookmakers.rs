// src/config/bookmakers.rs
//! Bookmaker roster and where each bookmaker's price sits in a runner row.
//!
//! The site renders one `<td data-odig=…>` per odds column, but a few of those
//! columns belong to bookmakers we don't track (or are decorative). Prices are
//! matched to bookmakers **by position only**: if the site reorders or inserts
//! columns, this table is the one place to fix. Nothing in the markup tells us
//! which column is which.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bookmaker {
    #[serde(rename = "bet365")]
    Bet365,
    #[serde(rename = "skybet")]
    Skybet,
    #[serde(rename = "ladbrokes")]
    Ladbrokes,
    #[serde(rename = "william_hill")]
    WilliamHill,
    #[serde(rename = "betfair")]
    Betfair,
    #[serde(rename = "betvictor")]
    BetVictor,
    #[serde(rename = "paddy_power")]
    PaddyPower,
    #[serde(rename = "unibet")]
    Unibet,
    #[serde(rename = "coral")]
    Coral,
    #[serde(rename = "betfred")]
    BetFred,
    #[serde(rename = "betway")]
    Betway,
    #[serde(rename = "totesport")]
    Totesport,
    #[serde(rename = "boylesports")]
    Boylesports,
}

/// Roster order paired with the raw `td[data-odig]` index holding that price.
pub const ROSTER: [(Bookmaker, usize); 13] = [
    (Bookmaker::Bet365, 0),
    (Bookmaker::Skybet, 1),
    (Bookmaker::Ladbrokes, 2),
    (Bookmaker::WilliamHill, 3),
    (Bookmaker::Betfair, 5),
    (Bookmaker::BetVictor, 6),
    (Bookmaker::PaddyPower, 7),
    (Bookmaker::Unibet, 8),
    (Bookmaker::Coral, 9),
    (Bookmaker::BetFred, 10),
    (Bookmaker::Betway, 11),
    (Bookmaker::Totesport, 12),
    (Bookmaker::Boylesports, 15),
];

/// Minimum number of raw price cells a row needs for the remap to succeed.
pub const fn required_cells() -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < ROSTER.len() {
        if ROSTER[i].1 > max {
            max = ROSTER[i].1;
        }
        i += 1;
    }
    max + 1
}

impl Bookmaker {
    /// Identifier used as the key of an odds mapping.
    pub fn key(self) -> &'static str {
        match self {
            Bookmaker::Bet365 => "bet365",
            Bookmaker::Skybet => "skybet",
            Bookmaker::Ladbrokes => "ladbrokes",
            Bookmaker::WilliamHill => "william_hill",
            Bookmaker::Betfair => "betfair",
            Bookmaker::BetVictor => "betvictor",
            Bookmaker::PaddyPower => "paddy_power",
            Bookmaker::Unibet => "unibet",
            Bookmaker::Coral => "coral",
            Bookmaker::BetFred => "betfred",
            Bookmaker::Betway => "betway",
            Bookmaker::Totesport => "totesport",
            Bookmaker::Boylesports => "boylesports",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Bookmaker::Bet365 => "Bet365",
            Bookmaker::Skybet => "Skybet",
            Bookmaker::Ladbrokes => "Ladbrokes",
            Bookmaker::WilliamHill => "William Hill",
            Bookmaker::Betfair => "Betfair",
            Bookmaker::BetVictor => "BetVictor",
            Bookmaker::PaddyPower => "Paddy Power",
            Bookmaker::Unibet => "Unibet",
            Bookmaker::Coral => "Coral",
            Bookmaker::BetFred => "BetFred",
            Bookmaker::Betway => "Betway",
            Bookmaker::Totesport => "Totesport",
            Bookmaker::Boylesports => "Boylesports",
        }
    }

    /// All bookmakers in roster order.
    pub fn all() -> impl Iterator<Item = Bookmaker> {
        ROSTER.iter().map(|(b, _)| *b)
    }
}

impl fmt::Display for Bookmaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
