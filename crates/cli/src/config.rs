// crates/cli/src/config.rs
use crate::args::Args;
pub use unique_ints_engine::config::{Config, ConfigBuilder};

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            input_dir: args.paths.input_dir.clone(),
            output_dir: args.paths.output_dir.clone(),
            output_suffix: args.paths.suffix.clone(),
            create_dirs: !args.paths.no_create_dirs,
        }
    }
}
