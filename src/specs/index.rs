// src/specs/index.rs
//! Scraping *spec* for the racing index (`/horse-racing`).
//!
//! Today's races sit in `div.module.show-times`, one
//! `div.racing-time > a[href]` per race. The link path is
//! `/<sport>/<meeting>/<time>/…`, and that path is the only place meeting and
//! race time come from.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::core::html::{attr, first, sel};
use crate::error::{Error, Result};
use crate::model::RaceKey;

static SHOW_TIMES: LazyLock<Selector> = LazyLock::new(|| sel(r#"div[class="module show-times"]"#));
static RACE_TIME_LINK: LazyLock<Selector> = LazyLock::new(|| sel(r#"div[class="racing-time"] > a"#));

/// A race page we know how to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceLink {
    pub url: String,
    pub key: RaceKey,
}

/// Every race link in the index, in page order.
///
/// `Err(MissingContainer)` when the race-times module isn't on the page, which
/// is normal around midnight when the site has no card up yet.
pub fn parse_index(doc: &Html, base: &Url) -> Result<Vec<RaceLink>> {
    let container = first(doc.root_element(), &SHOW_TIMES)
        .ok_or(Error::MissingContainer("race times"))?;

    let mut links = Vec::new();
    for a in container.select(&RACE_TIME_LINK) {
        let Some(href) = attr(a, "href") else {
            logd!("Index: race-time anchor without href, skipped");
            continue;
        };
        let url = match base.join(href) {
            Ok(u) => u,
            Err(e) => {
                logd!("Index: bad race href {href:?}: {e}");
                continue;
            }
        };
        match race_key(&url) {
            Some(key) => links.push(RaceLink { url: url.into(), key }),
            None => logd!("Index: no meeting/time in {url}"),
        }
    }
    Ok(links)
}

/// Meeting and time from `/<sport>/<meeting>/<time>/…`.
pub fn race_key(url: &Url) -> Option<RaceKey> {
    let mut segs = url.path_segments()?.skip(1);
    let course = segs.next().filter(|s| !s.is_empty())?;
    let time = segs.next().filter(|s| !s.is_empty())?;
    Some(RaceKey::new(course, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse;

    fn base() -> Url {
        Url::parse("https://www.oddschecker.com").unwrap()
    }

    #[test]
    fn links_in_page_order_with_keys() {
        let doc = parse(r#"
            <div class="module show-times">
              <div class="racing-time"><a href="/horse-racing/kempton/18:00/winner">18:00</a></div>
              <div class="racing-time"><a href="/horse-racing/wolverhampton/17:45/winner">17:45</a></div>
              <div class="racing-time"><a href="/horse-racing/kempton/18:30/winner">18:30</a></div>
            </div>
        "#);
        let links = parse_index(&doc, &base()).unwrap();
        let keys: Vec<(&str, &str)> = links.iter().map(|l| (l.key.course.as_str(), l.key.time.as_str())).collect();
        assert_eq!(keys, vec![("kempton", "18:00"), ("wolverhampton", "17:45"), ("kempton", "18:30")]);
        assert_eq!(links[0].url, "https://www.oddschecker.com/horse-racing/kempton/18:00/winner");
    }

    #[test]
    fn anchors_outside_container_or_without_href_are_ignored() {
        let doc = parse(r#"
            <div class="racing-time"><a href="/horse-racing/ayr/12:00/winner">12:00</a></div>
            <div class="module show-times">
              <div class="racing-time"><a>13:00</a></div>
              <div class="racing-time"><a href="/horse-racing">index</a></div>
              <div class="racing-time"><a href="/horse-racing/ayr/14:00">14:00</a></div>
            </div>
        "#);
        let links = parse_index(&doc, &base()).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].key, RaceKey::new("ayr", "14:00"));
    }

    #[test]
    fn missing_container_is_an_error() {
        let doc = parse("<html><body><p>No racing today</p></body></html>");
        assert!(matches!(parse_index(&doc, &base()), Err(Error::MissingContainer(_))));
    }

    #[test]
    fn race_key_from_absolute_url() {
        let url = Url::parse("https://www.oddschecker.com/horse-racing/newton-abbot/16:20/winner").unwrap();
        assert_eq!(race_key(&url), Some(RaceKey::new("newton-abbot", "16:20")));
        let short = Url::parse("https://www.oddschecker.com/horse-racing/ascot").unwrap();
        assert_eq!(race_key(&short), None);
    }
}
