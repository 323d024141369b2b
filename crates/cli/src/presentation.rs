// crates/cli/src/presentation.rs
use crate::config::Config;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use unique_ints_engine::progress::ProgressSink;
use unique_ints_engine::stats::{FileReport, FileStatus, RunResult};

/// Prints per-file progress lines as the engine works.
pub struct TextProgress<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> TextProgress<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

// Progress output is best effort; a closed stdout must not abort the batch.
impl<W: Write> ProgressSink for TextProgress<'_, W> {
    fn on_start(&mut self, total: usize) {
        if total > 0 {
            let _ = writeln!(self.out, "Found {total} files to process");
        }
    }

    fn on_file(&mut self, path: &Path) {
        let _ = writeln!(self.out, "\nProcessing {}...", path.display());
    }

    fn on_complete(&mut self, report: &FileReport) {
        let _ = print_file_status(self.out, report);
    }
}

/// `✓`/`✗` block for one processed file.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_file_status<W: Write>(out: &mut W, report: &FileReport) -> io::Result<()> {
    match &report.status {
        FileStatus::Completed { runtime_ms, .. } => {
            writeln!(out, "✓ Completed successfully!")?;
            writeln!(out, "  Runtime: {runtime_ms:.2} ms")
        }
        FileStatus::Failed { error } => writeln!(out, "✗ Error processing file: {error}"),
    }
}

/// Summary printed after a batch run.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_batch_summary<W: Write>(
    out: &mut W,
    result: &RunResult,
    config: &Config,
) -> io::Result<()> {
    if result.files.is_empty() {
        return writeln!(out, "No files found in {}", config.input_dir.display());
    }

    let mut succeeded = result.succeeded().peekable();
    if succeeded.peek().is_some() {
        writeln!(out, "\nSuccessfully processed files:")?;
        for report in succeeded {
            writeln!(
                out,
                "- {} (Runtime: {:.2} ms)",
                report.name,
                report.runtime_ms()
            )?;
        }
        writeln!(out, "\nResults saved in: {}", config.output_dir.display())?;
    }

    let failed = result.failed().count();
    if failed > 0 {
        writeln!(out, "\n{failed} file(s) failed:")?;
        for report in result.failed() {
            writeln!(out, "- {}", report.name)?;
        }
    }
    Ok(())
}

/// Pretty JSON followed by a newline.
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> crate::error::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
