use std::io;
use thiserror::Error;

/// Failure of a single hashing run.
#[derive(Error, Debug)]
pub enum HashError {
    /// The target file could not be opened or read. Displays the OS message as-is.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The `-a` value names no supported algorithm. The rejected name is kept
    /// for diagnostics; the displayed message is fixed.
    #[error("unknown algorithm")]
    UnknownAlgorithm(String),
}

impl HashError {
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }

    pub fn is_unknown_algorithm(&self) -> bool {
        matches!(self, Self::UnknownAlgorithm(_))
    }
}
