// tests/common/mod.rs
//
// Canned pages served from memory in place of the live site.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use liveodds::config::ClientOptions;
use liveodds::{Error, Fetcher, LiveOdds, Result};

pub const BASE: &str = "http://test.local";

pub const INDEX: &str = include_str!("../fixtures/index.html");
pub const INDEX_EMPTY: &str = include_str!("../fixtures/index_empty.html");
pub const ASCOT_1430: &str = include_str!("../fixtures/race_ascot_1430.html");
pub const ASCOT_1505: &str = include_str!("../fixtures/race_ascot_1505.html");
pub const AYR_1430: &str = include_str!("../fixtures/race_ayr_1430.html");

/// URL → body. Anything not registered is a 404. Every request is recorded.
#[derive(Default)]
pub struct MemFetcher {
    pages: HashMap<String, String>,
    pub hits: Mutex<Vec<String>>,
}

impl MemFetcher {
    pub fn page(mut self, path: &str, body: &str) -> Self {
        self.pages.insert(format!("{BASE}{path}"), body.to_string());
        self
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

impl Fetcher for MemFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.hits.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status { url: url.to_string(), status: 404 })
    }
}

/// Today's card: ascot 14:30 (good), ascot 15:05 (short price row),
/// ayr 14:30 (sparse header), ayr 16:10 (not served).
pub fn site() -> MemFetcher {
    MemFetcher::default()
        .page("/horse-racing", INDEX)
        .page("/horse-racing/ascot/14:30/winner", ASCOT_1430)
        .page("/horse-racing/ascot/15:05/winner", ASCOT_1505)
        .page("/horse-racing/ayr/14:30/winner", AYR_1430)
}

pub fn client(fetcher: MemFetcher) -> LiveOdds<MemFetcher> {
    LiveOdds::with_fetcher(fetcher, &ClientOptions::default().with_base_url(BASE)).unwrap()
}
