use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Summary format for batch and single-file runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Progress lines and a human readable summary
    #[default]
    Text,
    /// Pretty-printed JSON report only
    Json,
}
