//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps underlying I/O failures with the offending path, and keeps decode
//! failures distinct from transport-level I/O errors.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path:?} is not valid UTF-8: invalid byte sequence at offset {valid_up_to}")]
    Encoding { path: PathBuf, valid_up_to: usize },
}
