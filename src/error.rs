// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while processing an input file.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unable to open file: {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read error in {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
