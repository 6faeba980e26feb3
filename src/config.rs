// src/config.rs
use std::path::PathBuf;

use crate::args::{Args, OutputFormat};

/// 実行時設定
#[derive(Debug)]
pub struct Config {
    pub format: OutputFormat,
    pub summary_only: bool,
    pub strict: bool,
    pub paths: Vec<PathBuf>,
}

impl Config {
    #[must_use]
    pub fn from_args(args: Args) -> Self {
        // JSON output is a single document; echoed lines would corrupt it.
        let summary_only = args.summary_only || args.format == OutputFormat::Json;

        Self {
            format: args.format,
            summary_only,
            strict: args.strict,
            paths: args.paths,
        }
    }
}
