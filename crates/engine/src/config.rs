use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "sample_inputs";
pub const DEFAULT_OUTPUT_DIR: &str = "sample_results";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_results.txt";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory scanned in batch mode.
    #[builder(default = "PathBuf::from(DEFAULT_INPUT_DIR)")]
    pub input_dir: PathBuf,
    /// Directory receiving result files.
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_DIR)")]
    pub output_dir: PathBuf,
    /// Appended to the input file name to form the result file name.
    #[builder(default = "DEFAULT_OUTPUT_SUFFIX.to_string()")]
    pub output_suffix: String,
    /// Create missing input/output directories.
    #[builder(default = "true")]
    pub create_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            create_dirs: true,
        }
    }
}
