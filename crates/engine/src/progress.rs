// crates/engine/src/progress.rs
use crate::stats::FileReport;
use std::path::Path;

/// Receives batch progress as files are processed.
///
/// Every method defaults to a no-op.
pub trait ProgressSink {
    /// Called once the input directory has been listed.
    fn on_start(&mut self, _total: usize) {}

    /// Called before a file is processed.
    fn on_file(&mut self, _path: &Path) {}

    /// Called after a file has been processed, successfully or not.
    fn on_complete(&mut self, _report: &FileReport) {}
}

/// Sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}
