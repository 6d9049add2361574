// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress: Send {
    /// Called at the start with the total number of jobs (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., one brand+category search).
    fn item_done(&mut self, _label: &str) {}

    /// Called when one logical unit fails; the run continues.
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
