// src/scrape/mod.rs
mod live;
mod pool;

pub use live::LiveOdds;
