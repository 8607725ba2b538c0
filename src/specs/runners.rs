// src/specs/runners.rs
//! Scraping *spec* for the runner/odds table of a race page.
//!
//! Rows: `tbody#t1 tr`, one per runner, in race-card order.
//! - identity: `tr[data-bname]`, `tr[data-stall]`, `td.cardnum` (required)
//! - jockey/form: `div.bottom-row.jockey`, `span.current-form` (optional)
//! - non-runners: `a.popup.selTxt` text contains "N/R" → row skipped
//! - prices: every `td[data-odig]`, remapped through `config::bookmakers::ROSTER`
//!
//! A row we can't fully read fails the whole race rather than dropping one
//! horse: a race with a runner silently missing is worse than no race.

use std::sync::LazyLock;

use chrono::NaiveTime;
use scraper::{ElementRef, Html, Selector};

use crate::config::ROSTER;
use crate::config::bookmakers::required_cells;
use crate::core::html::{attr, first, sel, text, text_or};
use crate::error::{Error, Result};
use crate::model::{Odds, OddsQuote, Runner, RunnerCard};

const NON_RUNNER: &str = "N/R";

static BODY: LazyLock<Selector> = LazyLock::new(|| sel(r#"tbody[id="t1"]"#));
static ROW: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
static CARD_NUM: LazyLock<Selector> = LazyLock::new(|| sel(r#"td[class="cardnum"]"#));
static JOCKEY: LazyLock<Selector> = LazyLock::new(|| sel(r#"div[class="bottom-row jockey"]"#));
static FORM: LazyLock<Selector> = LazyLock::new(|| sel(r#"span[class="current-form"]"#));
static POPUP: LazyLock<Selector> = LazyLock::new(|| sel(r#"a[class="popup selTxt"]"#));
static PRICE: LazyLock<Selector> = LazyLock::new(|| sel("td[data-odig]"));

/// All runners on the page, non-runners excluded, all stamped `captured_at`.
pub fn parse_runners(doc: &Html, captured_at: NaiveTime) -> Result<Vec<Runner>> {
    let body = first(doc.root_element(), &BODY).ok_or(Error::MissingContainer("runner table"))?;

    let mut runners = Vec::new();
    for row in body.select(&ROW) {
        if let Some(runner) = parse_runner_row(row, captured_at)? {
            runners.push(runner);
        }
    }
    Ok(runners)
}

/// One runner row. `Ok(None)` for a non-runner.
pub fn parse_runner_row(row: ElementRef<'_>, captured_at: NaiveTime) -> Result<Option<Runner>> {
    if is_non_runner(row) {
        logd!("Runners: skipping non-runner {:?}", attr(row, "data-bname").unwrap_or_default());
        return Ok(None);
    }

    let card = parse_card(row)?;
    let odds = parse_odds(row, captured_at)?;
    Ok(Runner::new(card, odds))
}

fn is_non_runner(row: ElementRef<'_>) -> bool {
    text_or(row, &POPUP, "").contains(NON_RUNNER)
}

fn parse_card(row: ElementRef<'_>) -> Result<RunnerCard> {
    let name = attr(row, "data-bname")
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(Error::MissingField("data-bname"))?;
    let draw = attr(row, "data-stall").ok_or(Error::MissingField("data-stall"))?;
    let number = first(row, &CARD_NUM)
        .map(text)
        .filter(|n| !n.is_empty())
        .ok_or(Error::MissingField("cardnum"))?;

    Ok(RunnerCard {
        number,
        name: s!(name),
        draw: s!(draw.trim()),
        jockey: text_or(row, &JOCKEY, ""),
        form: text_or(row, &FORM, ""),
    })
}

fn parse_odds(row: ElementRef<'_>, captured_at: NaiveTime) -> Result<Odds> {
    let cells: Vec<ElementRef<'_>> = row.select(&PRICE).collect();

    let needed = required_cells();
    if cells.len() < needed {
        return Err(Error::InsufficientPrices { found: cells.len(), needed });
    }

    ROSTER
        .iter()
        .map(|&(bookmaker, idx)| {
            let price = parse_price(attr(cells[idx], "data-odig").unwrap_or_default())?;
            let quote = OddsQuote { bookmaker: s!(bookmaker.display_name()), price, captured_at };
            Ok((bookmaker, quote))
        })
        .collect()
}

fn parse_price(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| Error::BadPrice(s!(raw)))
}
