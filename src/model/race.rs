// src/model/race.rs
use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use super::odds::Odds;
use super::runner::Runner;
use crate::config::Bookmaker;
use crate::core::sanitize::title_case;
use crate::csv::{Delim, rows_to_string};
use crate::error::Result;

/// Header facts of a race card. Anything the page didn't show is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RaceMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_size: Option<u32>,
    pub distance: String,
    pub grade: String,
    pub prize: String,
    pub age: String,
    pub going: String,
}

/// (meeting, off time) as they appear in the race URL, e.g. `("ascot", "14:30")`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RaceKey {
    pub course: String,
    pub time: String,
}

impl RaceKey {
    pub fn new(course: impl Into<String>, time: impl Into<String>) -> Self {
        Self { course: course.into(), time: time.into() }
    }
}

impl fmt::Display for RaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", title_case(&self.course), self.time)
    }
}

/// One race as read from its page: metadata plus runners in race-card order.
#[derive(Clone, Debug, PartialEq)]
pub struct Race {
    key: RaceKey,
    meta: RaceMetadata,
    runners: Vec<Runner>,
}

impl Race {
    pub fn new(key: RaceKey, meta: RaceMetadata, runners: Vec<Runner>) -> Self {
        Self { key, meta, runners }
    }

    pub fn key(&self) -> &RaceKey { &self.key }
    pub fn course(&self) -> &str { &self.key.course }
    pub fn time(&self) -> &str { &self.key.time }
    pub fn metadata(&self) -> &RaceMetadata { &self.meta }
    pub fn name(&self) -> &str { &self.meta.name }
    pub fn distance(&self) -> &str { &self.meta.distance }
    pub fn going(&self) -> &str { &self.meta.going }
    pub fn grade(&self) -> &str { &self.meta.grade }
    pub fn prize(&self) -> &str { &self.meta.prize }
    pub fn age(&self) -> &str { &self.meta.age }
    pub fn field_size(&self) -> Option<u32> { self.meta.field_size }
    pub fn runners(&self) -> &[Runner] { &self.runners }

    /// Runner name → that runner's odds.
    pub fn odds(&self) -> BTreeMap<&str, &Odds> {
        self.runners.iter().map(|r| (r.name(), r.odds())).collect()
    }

    /// Metadata fields plus `"runners": [{name: odds}, …]` in race-card order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Blank corner cell + bookmaker names, then one row of prices per runner.
    pub fn odds_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let mut headers = vec![s!()];
        headers.extend(Bookmaker::all().map(|b| s!(b.display_name())));

        let rows = self
            .runners
            .iter()
            .map(|r| {
                let mut row = vec![s!(r.name())];
                row.extend(Bookmaker::all().map(|b| {
                    r.odds().get(&b).map(|q| q.price.to_string()).unwrap_or_default()
                }));
                row
            })
            .collect();

        (headers, rows)
    }

    /// [`Race::odds_table`] rendered as CSV/TSV with the header line.
    pub fn odds_table_string(&self, delim: Delim) -> String {
        let (headers, rows) = self.odds_table();
        rows_to_string(&rows, &Some(headers), delim)
    }
}

#[derive(Serialize)]
struct RaceJson<'a> {
    #[serde(flatten)]
    meta: &'a RaceMetadata,
    runners: Vec<BTreeMap<&'a str, &'a Odds>>,
}

impl Serialize for Race {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RaceJson {
            meta: &self.meta,
            runners: self
                .runners
                .iter()
                .map(|r| BTreeMap::from([(r.name(), r.odds())]))
                .collect(),
        }
        .serialize(serializer)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.meta.field_size.map(|n| n.to_string()).unwrap_or_default();
        writeln!(f, "{} {}", self.key.time, title_case(&self.key.course))?;
        writeln!(f, "{}", self.meta.name)?;
        writeln!(f, "{}   {}", self.meta.distance, self.meta.grade)?;
        writeln!(f, "Going: {}", self.meta.going)?;
        writeln!(f, "Runners: {size}")?;
        writeln!(f, "Age: {}", self.meta.age)?;
        writeln!(f, "Winner: {}", self.meta.prize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::odds::OddsQuote;
    use crate::model::runner::RunnerCard;
    use chrono::NaiveTime;

    fn runner(name: &str, base: f64) -> Runner {
        let t = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let odds: Odds = Bookmaker::all()
            .enumerate()
            .map(|(i, b)| (b, OddsQuote { bookmaker: s!(b.display_name()), price: base + i as f64, captured_at: t }))
            .collect();
        let card = RunnerCard { number: s!("1"), name: s!(name), ..Default::default() };
        Runner::new(card, odds).unwrap()
    }

    fn race() -> Race {
        let meta = RaceMetadata {
            name: s!("Coronation Cup"),
            field_size: Some(2),
            distance: s!("1m4f"),
            grade: s!("Class:1"),
            going: s!("Good"),
            ..Default::default()
        };
        Race::new(RaceKey::new("epsom", "15:15"), meta, vec![runner("Zeta", 2.0), runner("Alpha", 3.0)])
    }

    #[test]
    fn json_lists_runners_in_card_order() {
        let v: serde_json::Value = serde_json::from_str(&race().to_json().unwrap()).unwrap();
        assert_eq!(v["name"], "Coronation Cup");
        assert_eq!(v["field_size"], 2);
        assert_eq!(v["prize"], "");
        let runners = v["runners"].as_array().unwrap();
        assert_eq!(runners.len(), 2);
        assert!(runners[0].get("Zeta").is_some());
        assert!(runners[1].get("Alpha").is_some());
        assert_eq!(runners[0]["Zeta"].as_object().unwrap().len(), 13);
    }

    #[test]
    fn json_omits_unknown_field_size() {
        let r = Race::new(RaceKey::new("ayr", "13:00"), RaceMetadata::default(), Vec::new());
        let v: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert!(v.get("field_size").is_none());
        assert_eq!(v["runners"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn odds_table_shape() {
        let (headers, rows) = race().odds_table();
        assert_eq!(headers.len(), 14);
        assert_eq!(headers[1], "Bet365");
        assert_eq!(headers[13], "Boylesports");
        assert_eq!(rows[0][0], "Zeta");
        assert_eq!(rows[0][1], "2");
        assert_eq!(rows[1][13], "15");
    }

    #[test]
    fn odds_table_string_has_header_line() {
        let s = race().odds_table_string(Delim::Tsv);
        let first = s.lines().next().unwrap();
        assert!(first.starts_with("\tBet365\tSkybet"));
        assert_eq!(s.lines().count(), 3);
    }

    #[test]
    fn info_and_key_display() {
        let r = race();
        assert_eq!(r.key().to_string(), "Epsom 15:15");
        let info = r.to_string();
        assert!(info.starts_with("15:15 Epsom\nCoronation Cup\n1m4f   Class:1\n"));
        assert!(info.contains("Runners: 2\n"));
    }

    #[test]
    fn odds_by_runner_name() {
        let r = race();
        let odds = r.odds();
        assert_eq!(odds.len(), 2);
        assert_eq!(odds["Alpha"][&Bookmaker::Bet365].price, 3.0);
    }
}
