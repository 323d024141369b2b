// crates/cli/src/interactive.rs
//! Menu-driven mode used when neither `--all` nor `--file` is given.
//!
//! Reads choices from any `BufRead` and writes to any `Write`, so the loop can
//! be driven by a script in tests. End of input behaves like choosing "Exit".

use crate::commands;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::options::OutputFormat;
use std::io::{BufRead, Write};
use unique_ints_engine::filesystem;

/// Run the menu loop until the user exits or input ends.
///
/// Failures of a single menu action are printed and the loop continues.
///
/// # Errors
/// Returns an error only if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, config: &Config) -> Result<()> {
    loop {
        writeln!(out, "\n===== Unique Integers Processor =====")?;
        writeln!(
            out,
            "1. Process all files in {} folder",
            config.input_dir.display()
        )?;
        writeln!(out, "2. Process a specific file")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = prompt(input, out, "\nEnter your choice (1-3): ")? else {
            writeln!(out)?;
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                if let Err(e) = commands::run_batch(out, config, OutputFormat::Text) {
                    writeln!(out, "Error: {e}")?;
                }
            }
            "2" => {
                if !choose_file(input, out, config)? {
                    writeln!(out)?;
                    return Ok(());
                }
            }
            "3" => {
                writeln!(out, "Exiting program. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please enter 1, 2, or 3.")?,
        }
    }
}

/// List the input folder and process the chosen file.
///
/// Returns `false` if input ended while waiting for a choice.
fn choose_file<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
) -> Result<bool> {
    writeln!(out, "\nFiles in {}:", config.input_dir.display())?;
    let files = match filesystem::list_inputs(&config.input_dir) {
        Ok(files) => files,
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            return Ok(true);
        }
    };

    for (i, file) in files.iter().enumerate() {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        writeln!(out, "{}. {name}", i + 1)?;
    }

    if files.is_empty() {
        writeln!(
            out,
            "No files found. Please add files to the {} folder.",
            config.input_dir.display()
        )?;
        return Ok(true);
    }

    let Some(answer) = prompt(
        input,
        out,
        "\nEnter the number of the file to process (or 'b' to go back): ",
    )?
    else {
        return Ok(false);
    };

    if answer.eq_ignore_ascii_case("b") {
        return Ok(true);
    }

    match answer.parse::<usize>() {
        Ok(n) if (1..=files.len()).contains(&n) => {
            if let Err(e) = commands::run_file(out, config, &files[n - 1], OutputFormat::Text) {
                writeln!(out, "Error: {e}")?;
            }
        }
        Ok(_) => writeln!(out, "Invalid file number")?,
        Err(_) => writeln!(out, "Invalid input")?,
    }
    Ok(true)
}

/// Print `message`, then read one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(AppError::MenuInput)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
