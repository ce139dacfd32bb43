use cts_core::error::Row;
use cts_core::AlphabetError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the CLI before or while solving.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid preset file {path}: {source}")]
    Presets {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
    #[error("{row} row: {source}")]
    Row {
        row: Row,
        #[source]
        source: AlphabetError,
    },
    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("cannot write output: {0}")]
    Write(#[from] std::io::Error),
}

impl CliError {
    /// 1 for bad puzzle input, 2 for configuration and usage problems.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Row { .. } => 1,
            _ => 2,
        }
    }
}
