// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific parsing for the odds site. Each spec covers one kind of page
//! and encodes *where the data lives in the HTML* and *how to read it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched pages (`index`, `race`, `runners`).
//! - **Selector choice**, kept as `LazyLock<Selector>` statics at the top of each file.
//! - **Tolerance rules**: which fields may be missing (empty value) and which
//!   make the whole page unusable (`Err`).
//!
//! ## What does **not** live here
//! - **Networking**: the query layer (`scrape`) fetches and hands over the body.
//! - **Degrading errors to empty results**: specs return `Result`; `scrape`
//!   decides to log and carry on.
//!
//! ## Typical call chain
//! ```text
//! caller → scrape::LiveOdds::{race,course,all}
//!            → fetch index  → specs::index::parse_index   → [RaceLink]
//!            → fetch page   → specs::race::parse_page
//!                                ↘ parse_race (header) + runners::parse_runners
//! ```
//!
//! ## Testing notes
//! Every spec is testable offline against inline snippets or the captured
//! pages under `tests/fixtures/`.
pub mod index;
pub mod race;
pub mod runners;

pub use index::{RaceLink, parse_index};
pub use race::{parse_page, parse_race};
pub use runners::{parse_runner_row, parse_runners};
