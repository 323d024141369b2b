// crates/cli/src/commands.rs
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::options::OutputFormat;
use crate::presentation::{self, TextProgress};
use std::io::Write;
use std::path::Path;
use unique_ints_engine::error::EngineError;
use unique_ints_engine::filesystem;

/// Create the input and output folders if missing, announcing each one.
///
/// # Errors
/// Returns an error if a folder cannot be created.
pub fn prepare_folders<W: Write>(out: &mut W, config: &Config, format: OutputFormat) -> Result<()> {
    if !config.create_dirs {
        return Ok(());
    }
    for (label, dir) in [("input", &config.input_dir), ("output", &config.output_dir)] {
        if filesystem::ensure_dir(dir)? && format == OutputFormat::Text {
            writeln!(out, "Created {label} folder: {}", dir.display())?;
        }
    }
    Ok(())
}

/// Process every file of the input folder. Returns `true` if no file failed.
///
/// # Errors
/// Returns an error if the batch cannot start or output cannot be written.
pub fn run_batch<W: Write>(out: &mut W, config: &Config, format: OutputFormat) -> Result<bool> {
    let result = match format {
        OutputFormat::Text => {
            let mut progress = TextProgress::new(&mut *out);
            unique_ints_engine::run_with_progress(config, &mut progress)?
        }
        OutputFormat::Json => unique_ints_engine::run(config)?,
    };

    match format {
        OutputFormat::Text => presentation::print_batch_summary(out, &result, config)?,
        OutputFormat::Json => presentation::print_json(out, &result)?,
    }
    Ok(result.all_succeeded())
}

/// Process one file. Returns `true` on success.
///
/// In text mode a missing file is reported on `out` and yields `false`; in
/// JSON mode it is returned as an error.
///
/// # Errors
/// Returns an error if the output folder cannot be created or output cannot
/// be written.
pub fn run_file<W: Write>(
    out: &mut W,
    config: &Config,
    input: &Path,
    format: OutputFormat,
) -> Result<bool> {
    let report = match format {
        OutputFormat::Text => {
            let mut progress = TextProgress::new(&mut *out);
            match unique_ints_engine::run_single_with_progress(config, input, &mut progress) {
                Ok(report) => report,
                Err(EngineError::InputNotFound(path)) => {
                    writeln!(out, "Error: File not found: {}", path.display())?;
                    return Ok(false);
                }
                Err(e) => return Err(AppError::from(e)),
            }
        }
        OutputFormat::Json => {
            let report = unique_ints_engine::run_single(config, input)?;
            presentation::print_json(out, &report)?;
            report
        }
    };
    Ok(report.is_success())
}
