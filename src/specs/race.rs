// src/specs/race.rs
//! Scraping *spec* for a single race page (`/horse-racing/<meeting>/<time>/winner`).
//!
//! Header: `div.page-description` holds the race name (`div.event`) and a list
//! of labelled facts (`div.content-right li`). Every header field is optional;
//! a label the site drops just leaves that field empty.
//!
//! Runners: see `specs::runners`.

use std::sync::LazyLock;

use chrono::NaiveTime;
use scraper::{Html, Selector};

use super::runners::parse_runners;
use crate::config::fields::{RACE_FIELDS, RaceField, match_label};
use crate::core::html::{first, parse, sel, text, text_or};
use crate::error::Result;
use crate::model::{Race, RaceKey, RaceMetadata};

static HEADER: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"div[class="page-description module grid-header-all-sports"]"#));
static EVENT: LazyLock<Selector> = LazyLock::new(|| sel(r#"div[class="event"]"#));
static INFO_ITEMS: LazyLock<Selector> = LazyLock::new(|| sel(r#"div[class="content-right"] li"#));
static FIELD_VALUES: LazyLock<Vec<Selector>> =
    LazyLock::new(|| RACE_FIELDS.iter().map(|f| sel(f.value)).collect());

/// Parse a fetched race page into a [`Race`].
///
/// Fails only when the runner table is missing or a runner row is unusable;
/// in that case no partial race is produced.
pub fn parse_page(body: &str, key: RaceKey, captured_at: NaiveTime) -> Result<Race> {
    let doc = parse(body);
    let meta = parse_race(&doc);
    let runners = parse_runners(&doc, captured_at)?;
    Ok(Race::new(key, meta, runners))
}

/// Header metadata. Never fails; missing pieces stay empty.
pub fn parse_race(doc: &Html) -> RaceMetadata {
    let mut meta = RaceMetadata::default();

    let Some(header) = first(doc.root_element(), &HEADER) else {
        logd!("Race: header block missing, metadata left empty");
        return meta;
    };

    meta.name = text_or(header, &EVENT, "");

    for li in header.select(&INFO_ITEMS) {
        let label = text(li);
        let Some((i, spec)) = match_label(&label) else { continue };

        let Some(value) = first(li, &FIELD_VALUES[i]).map(text) else {
            logd!("Race: {:?} item has no value", spec.label);
            continue;
        };
        let value = format!("{}{}", spec.prefix, value);

        match spec.field {
            RaceField::FieldSize => {
                meta.field_size = value.parse().ok();
                if meta.field_size.is_none() {
                    logd!("Race: starters {value:?} is not a number");
                }
            }
            RaceField::Distance => meta.distance = value,
            RaceField::Grade => meta.grade = value,
            RaceField::Prize => meta.prize = value,
            RaceField::Age => meta.age = value,
            RaceField::Going => meta.going = value,
        }
    }

    meta
}
