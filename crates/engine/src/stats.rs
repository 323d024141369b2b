use crate::error::{EngineError, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Result of one processing call: success flag plus elapsed time.
///
/// `elapsed` is zero whenever `success` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub elapsed: Duration,
}

impl Outcome {
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            success: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl From<Result<Duration>> for Outcome {
    fn from(result: Result<Duration>) -> Self {
        match result {
            Ok(elapsed) => Self {
                success: true,
                elapsed,
            },
            Err(_) => Self::failed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileStatus {
    Completed { runtime_ms: f64, distinct: usize },
    Failed { error: String },
}

/// Per-file entry of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileReport {
    pub(crate) fn new(input: &Path, output: PathBuf, status: FileStatus) -> Self {
        let name = input
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            input: input.to_path_buf(),
            output,
            status,
        }
    }

    pub(crate) fn completed(
        input: &Path,
        output: PathBuf,
        elapsed: Duration,
        distinct: usize,
    ) -> Self {
        let runtime_ms = elapsed.as_secs_f64() * 1000.0;
        Self::new(input, output, FileStatus::Completed { runtime_ms, distinct })
    }

    pub(crate) fn failed(input: &Path, output: PathBuf, error: &EngineError) -> Self {
        Self::new(
            input,
            output,
            FileStatus::Failed {
                error: error.to_string(),
            },
        )
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Completed { .. })
    }

    /// Runtime in milliseconds, `0.0` for failed files.
    #[must_use]
    pub fn runtime_ms(&self) -> f64 {
        match &self.status {
            FileStatus::Completed { runtime_ms, .. } => *runtime_ms,
            FileStatus::Failed { .. } => 0.0,
        }
    }
}

/// Collected reports of one batch run, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub started_at: DateTime<Local>,
    pub files: Vec<FileReport>,
}

impl RunResult {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Local::now(),
            files: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_success())
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.files.iter().all(FileReport::is_success)
    }
}

impl Default for RunResult {
    fn default() -> Self {
        Self::new()
    }
}
