use crate::error::{EngineError, Result};
use crate::marker::PresenceMarker;
use crate::parser::parse_line;
use crate::stats::Outcome;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Dedupe-and-sort engine over the bounded range.
///
/// Owns one presence marker, reset at the start of every call. Taking `&mut
/// self` keeps two in-flight runs from sharing a marker; independent files
/// can be processed in parallel with one `Deduper` each.
#[derive(Debug, Default)]
pub struct Deduper {
    marker: PresenceMarker,
}

impl Deduper {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PresenceMarker::new(),
        }
    }

    /// Values seen by the most recent run.
    #[must_use]
    pub const fn marker(&self) -> &PresenceMarker {
        &self.marker
    }

    /// Read every line of `input`, then write the distinct in-range values to
    /// `output` in ascending order, one per line.
    ///
    /// # Errors
    /// Returns [`EngineError::Io`] if reading or writing fails.
    pub fn try_process<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<Duration>
    where
        R: BufRead,
        W: Write,
    {
        self.marker.reset();
        let start = Instant::now();
        self.mark_lines(input)?;
        self.emit(output)?;
        Ok(start.elapsed())
    }

    /// Infallible form of [`Self::try_process`]: I/O failures become an
    /// unsuccessful [`Outcome`] with zero elapsed time.
    pub fn process<R, W>(&mut self, input: &mut R, output: &mut W) -> Outcome
    where
        R: BufRead,
        W: Write,
    {
        let result = self.try_process(input, output);
        if let Err(e) = &result {
            log::error!("processing failed: {e}");
        }
        Outcome::from(result)
    }

    /// Process the file at `input` into a newly created (or truncated) file at
    /// `output`.
    ///
    /// The input is read completely before the output is created, so a missing
    /// or unreadable input leaves no output behind.
    ///
    /// # Errors
    /// Returns [`EngineError::InputRead`] or [`EngineError::OutputWrite`]
    /// naming the path that failed.
    pub fn try_process_file(&mut self, input: &Path, output: &Path) -> Result<Duration> {
        let read_err = |source| EngineError::InputRead {
            path: input.to_path_buf(),
            source,
        };
        let write_err = |source| EngineError::OutputWrite {
            path: output.to_path_buf(),
            source,
        };

        self.marker.reset();
        let start = Instant::now();

        let mut reader = File::open(input).map(BufReader::new).map_err(read_err)?;
        self.mark_lines(&mut reader).map_err(read_err)?;

        let mut writer = File::create(output).map(BufWriter::new).map_err(write_err)?;
        self.emit(&mut writer).map_err(write_err)?;

        let elapsed = start.elapsed();
        log::debug!(
            "{}: {} distinct values -> {}",
            input.display(),
            self.marker.count(),
            output.display()
        );
        Ok(elapsed)
    }

    /// Infallible form of [`Self::try_process_file`].
    pub fn process_file(&mut self, input: &Path, output: &Path) -> Outcome {
        let result = self.try_process_file(input, output);
        if let Err(e) = &result {
            log::error!("{e}");
        }
        Outcome::from(result)
    }

    fn mark_lines<R: BufRead>(&mut self, reader: &mut R) -> std::io::Result<()> {
        let mut line_buf = Vec::new();
        loop {
            line_buf.clear();
            if reader.read_until(b'\n', &mut line_buf)? == 0 {
                break;
            }
            // Invalid UTF-8 turns into replacement characters, which never parse.
            let line = String::from_utf8_lossy(&line_buf);
            if let Some(value) = parse_line(&line) {
                self.marker.mark(value);
            }
        }
        Ok(())
    }

    fn emit<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for value in &self.marker {
            writeln!(writer, "{value}")?;
        }
        writer.flush()
    }
}
