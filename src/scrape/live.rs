// src/scrape/live.rs
//! Query layer: decides *what* to fetch, calls the specs, and turns every
//! failure into an empty (logged) result so callers never have to handle
//! errors while polling live odds.
//!
//! No state survives between calls. Each query re-reads the index and every
//! race page it needs.

use std::collections::{BTreeMap, BTreeSet};

use url::Url;

use crate::config::ClientOptions;
use crate::core::html;
use crate::core::net::{Fetcher, HttpFetcher};
use crate::error::{Error, Result};
use crate::model::{Race, RaceKey, capture_time};
use crate::progress::Progress;
use crate::specs::{RaceLink, parse_index, parse_page};

pub struct LiveOdds<F: Fetcher = HttpFetcher> {
    fetcher: F,
    base: Url,
    index_url: String,
}

impl LiveOdds<HttpFetcher> {
    /// Live client against the public site with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(opts: ClientOptions) -> Result<Self> {
        let fetcher = HttpFetcher::new(&opts)?;
        Self::with_fetcher(fetcher, &opts)
    }
}

impl<F: Fetcher> LiveOdds<F> {
    /// Use any [`Fetcher`]; `opts.base_url` is still used to build and resolve URLs.
    pub fn with_fetcher(fetcher: F, opts: &ClientOptions) -> Result<Self> {
        let base = Url::parse(&opts.base_url)?;
        Ok(Self { fetcher, base, index_url: opts.index_url() })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Today's race links in index order. Empty if the index is unavailable.
    pub fn race_links(&self) -> Vec<RaceLink> {
        let body = match self.fetcher.fetch(&self.index_url) {
            Ok(body) => body,
            Err(e) => {
                logw!("Index: {e}");
                return Vec::new();
            }
        };

        match parse_index(&html::parse(&body), &self.base) {
            Ok(links) => {
                logd!("Index: {} race links", links.len());
                links
            }
            Err(e) => {
                logw!("Index: {e}; no races listed, it could be around midnight, try again in a few minutes");
                Vec::new()
            }
        }
    }

    /// Meetings with at least one race listed today.
    pub fn list_courses(&self) -> BTreeSet<String> {
        self.race_links().into_iter().map(|l| l.key.course).collect()
    }

    /// Race times in index order, optionally only those at `course`
    /// (case-insensitive). An unknown course gives an empty list.
    pub fn list_races(&self, course: Option<&str>) -> Vec<String> {
        self.race_links()
            .into_iter()
            .filter(|l| course.is_none_or(|c| l.key.course.eq_ignore_ascii_case(c)))
            .map(|l| l.key.time)
            .collect()
    }

    /// Every race at `course`, keyed by race time. Races that fail to load are left out.
    pub fn course(&self, course: &str) -> BTreeMap<String, Race> {
        let links: Vec<RaceLink> = self
            .race_links()
            .into_iter()
            .filter(|l| l.key.course.eq_ignore_ascii_case(course))
            .collect();

        if links.is_empty() {
            logd!("Course {course:?}: not racing today");
        }

        self.load_links(&links, None)
            .into_iter()
            .map(|(key, race)| (key.time, race))
            .collect()
    }

    /// First race listed at `time` (any course).
    pub fn race(&self, time: &str) -> Option<Race> {
        let link = self.race_links().into_iter().find(|l| l.key.time == time)?;
        self.load(&link)
    }

    /// The race at `course` and `time`.
    pub fn race_at(&self, course: &str, time: &str) -> Option<Race> {
        let link = self
            .race_links()
            .into_iter()
            .find(|l| l.key.course.eq_ignore_ascii_case(course) && l.key.time == time)?;
        self.load(&link)
    }

    /// Every race listed today, fetched one after another.
    pub fn all(&self) -> BTreeMap<RaceKey, Race> {
        self.all_with_progress(None)
    }

    pub fn all_with_progress(&self, progress: Option<&mut dyn Progress>) -> BTreeMap<RaceKey, Race> {
        let links = self.race_links();
        self.load_links(&links, progress)
    }

    /// Fetch and parse one race page; `None` (logged) on any failure.
    pub fn load(&self, link: &RaceLink) -> Option<Race> {
        match self.try_load(link) {
            Ok(race) => Some(race),
            Err(e @ (Error::Http(_) | Error::Status { .. })) => {
                logw!("Race {}: {e}", link.key);
                None
            }
            Err(e) => {
                loge!("Race {}: {e}", link.key);
                None
            }
        }
    }

    /// Like [`LiveOdds::load`] but with the reason for a failure.
    pub fn try_load(&self, link: &RaceLink) -> Result<Race> {
        let body = self.fetcher.fetch(&link.url)?;
        let race = parse_page(&body, link.key.clone(), capture_time())?;
        logd!("Race {}: {} runners", link.key, race.runners().len());
        Ok(race)
    }

    fn load_links(
        &self,
        links: &[RaceLink],
        mut progress: Option<&mut dyn Progress>,
    ) -> BTreeMap<RaceKey, Race> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(links.len());
            p.log(&format!("Fetching {} races", links.len()));
        }

        let mut races = BTreeMap::new();
        for link in links {
            match self.load(link) {
                Some(race) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&link.key);
                    }
                    races.insert(link.key.clone(), race);
                }
                None => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&link.key);
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        races
    }
}
