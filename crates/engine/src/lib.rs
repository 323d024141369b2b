// crates/engine/src/lib.rs
use std::path::Path;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod marker;
pub mod parser;
pub mod processor;
pub mod progress;
pub mod range;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::processor::Deduper;
use crate::progress::{NoProgress, ProgressSink};
use crate::stats::{FileReport, RunResult};

/// Process every regular file of `config.input_dir` into `config.output_dir`.
///
/// Files are handled one at a time with a single reused [`Deduper`] whose
/// marker is reset per file. A failure on one file is recorded in its
/// [`FileReport`] and does not stop the remaining files.
///
/// # Errors
///
/// Returns an error only when the batch cannot start: the output directory
/// cannot be created or the input directory cannot be listed.
pub fn run(config: &Config) -> Result<RunResult> {
    run_with_progress(config, &mut NoProgress)
}

/// [`run`], reporting each step to `progress`.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with_progress(config: &Config, progress: &mut dyn ProgressSink) -> Result<RunResult> {
    if config.create_dirs {
        filesystem::ensure_dir(&config.output_dir)?;
    }
    let inputs = filesystem::list_inputs(&config.input_dir)?;
    log::debug!(
        "{} input files in {}",
        inputs.len(),
        config.input_dir.display()
    );

    progress.on_start(inputs.len());

    let mut result = RunResult::new();
    let mut deduper = Deduper::new();
    for input in &inputs {
        progress.on_file(input);
        let report = process_one(&mut deduper, input, config);
        progress.on_complete(&report);
        result.files.push(report);
    }
    Ok(result)
}

/// Process one explicitly named file into `config.output_dir`.
///
/// # Errors
///
/// Returns [`EngineError::InputNotFound`] if `input` does not exist, or a
/// directory error if the output directory cannot be created. I/O failures
/// while processing are reported in the returned [`FileReport`].
pub fn run_single(config: &Config, input: &Path) -> Result<FileReport> {
    run_single_with_progress(config, input, &mut NoProgress)
}

/// [`run_single`], reporting the file to `progress`.
///
/// # Errors
///
/// Same as [`run_single`].
pub fn run_single_with_progress(
    config: &Config,
    input: &Path,
    progress: &mut dyn ProgressSink,
) -> Result<FileReport> {
    if !input.exists() {
        return Err(EngineError::InputNotFound(input.to_path_buf()));
    }
    if config.create_dirs {
        filesystem::ensure_dir(&config.output_dir)?;
    }
    progress.on_file(input);
    let report = process_one(&mut Deduper::new(), input, config);
    progress.on_complete(&report);
    Ok(report)
}

fn process_one(deduper: &mut Deduper, input: &Path, config: &Config) -> FileReport {
    let output = filesystem::output_path_for(input, &config.output_dir, &config.output_suffix);
    match deduper.try_process_file(input, &output) {
        Ok(elapsed) => FileReport::completed(input, output, elapsed, deduper.marker().count()),
        Err(e) => {
            log::error!("{e}");
            FileReport::failed(input, output, &e)
        }
    }
}
