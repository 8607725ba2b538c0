// src/progress.rs
use crate::model::RaceKey;

/// Lightweight progress reporting for batch loads (`LiveOdds::all_with_progress`).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of races about to be fetched.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One race fetched and parsed.
    fn item_done(&mut self, _race: &RaceKey) {}

    /// One race could not be loaded; the batch carries on.
    fn item_failed(&mut self, _race: &RaceKey) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
