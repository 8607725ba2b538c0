// src/scrape/pool.rs
// Bounded-concurrency variant of `LiveOdds::all`.
// Workers pull the next link off a shared counter; results come back over a
// channel and are reassembled into the same ordered map `all()` returns.

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc,
};
use std::thread;

use super::live::LiveOdds;
use crate::config::consts::WORKERS;
use crate::core::net::Fetcher;
use crate::model::{Race, RaceKey};
use crate::specs::RaceLink;

impl<F: Fetcher> LiveOdds<F> {
    /// [`LiveOdds::all`] with up to `workers` pages in flight (0 → default of 4).
    pub fn all_concurrent(&self, workers: usize) -> BTreeMap<RaceKey, Race> {
        let links = self.race_links();
        let workers = if workers == 0 { WORKERS } else { workers };
        self.load_links_concurrent(&links, workers)
    }

    fn load_links_concurrent(&self, links: &[RaceLink], workers: usize) -> BTreeMap<RaceKey, Race> {
        if links.is_empty() {
            return BTreeMap::new();
        }

        let workers = workers.min(links.len()).max(1);
        let counter = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<(RaceKey, Option<Race>)>();

        logd!("Pool: {} races over {workers} workers", links.len());

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let idx = &counter;
                scope.spawn(move || {
                    loop {
                        let i = idx.fetch_add(1, Ordering::Relaxed);
                        let Some(link) = links.get(i) else { break };
                        let _ = tx.send((link.key.clone(), self.load(link)));
                    }
                });
            }
            drop(res_tx); // main thread is sole receiver now

            res_rx
                .iter()
                .filter_map(|(key, race)| race.map(|r| (key, r)))
                .collect()
        })
    }
}
