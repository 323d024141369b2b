// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use unique_ints_engine::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_SUFFIX};

use crate::options::OutputFormat;

/// What the invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    All,
    File(PathBuf),
    Interactive,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "unique_ints",
    version = crate::VERSION,
    about = "Writes the distinct integers of each input file in ascending order",
    long_about = "Reads text files with one integer per line, keeps the values in \
                  [-1023, 1023] and writes each distinct value once, in ascending order.",
    after_help = "If run without --all or --file, the program enters interactive mode."
)]
pub struct Args {
    #[command(flatten)]
    pub mode: ModeOptions,

    #[command(flatten)]
    pub paths: PathOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl Args {
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.mode.all {
            Mode::All
        } else if let Some(file) = &self.mode.file {
            Mode::File(file.clone())
        } else {
            Mode::Interactive
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ModeOptions {
    /// Process all files in the input folder
    #[arg(short = 'a', long, conflicts_with = "file", help_heading = "Mode")]
    pub all: bool,

    /// Process a specific file
    #[arg(
        short = 'f',
        long,
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        help_heading = "Mode"
    )]
    pub file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct PathOptions {
    /// Folder scanned by --all and interactive mode
    #[arg(
        long,
        value_name = "DIR",
        default_value = DEFAULT_INPUT_DIR,
        value_hint = ValueHint::DirPath,
        help_heading = "Paths"
    )]
    pub input_dir: PathBuf,

    /// Folder receiving the result files
    #[arg(
        long,
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        value_hint = ValueHint::DirPath,
        help_heading = "Paths"
    )]
    pub output_dir: PathBuf,

    /// Appended to the input file name to name its result file
    #[arg(
        long,
        default_value = DEFAULT_OUTPUT_SUFFIX,
        allow_hyphen_values = true,
        help_heading = "Paths"
    )]
    pub suffix: String,

    /// Do not create missing folders
    #[arg(long, help_heading = "Paths")]
    pub no_create_dirs: bool,
}

#[derive(clap::Args, Debug)]
pub struct OutputOptions {
    /// Summary format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_flags_means_interactive() {
        let args = Args::try_parse_from(["unique_ints"]).unwrap();
        assert_eq!(args.mode(), Mode::Interactive);
        assert_eq!(args.paths.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(args.output.format, OutputFormat::Text);
    }

    #[test]
    fn file_flag_selects_file_mode() {
        let args = Args::try_parse_from(["unique_ints", "-f", "in.txt"]).unwrap();
        assert_eq!(args.mode(), Mode::File(PathBuf::from("in.txt")));
    }

    #[test]
    fn all_and_file_conflict() {
        assert!(Args::try_parse_from(["unique_ints", "--all", "--file", "x"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::try_parse_from(["unique_ints", "-a", "-vv", "--format", "json"]).unwrap();
        assert_eq!(args.mode(), Mode::All);
        assert_eq!(args.output.verbose, 2);
        assert_eq!(args.output.format, OutputFormat::Json);
    }
}
