//! Line source seam

use std::io;
use thiserror::Error;

/// Failure to open a line source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source does not exist. Distinct from every other failure: the
    /// reloader checks for it before mutating anything.
    #[error(
        "Fixture file not found.\n\
         Please make sure the appropriate fixture exists in a file at {path}"
    )]
    NotFound { path: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// An ordered, finite sequence of raw text lines, one candidate record each.
///
/// `open` starts a fresh pass over the source; each invocation of the
/// reloader opens the source exactly once.
pub trait LineSource {
    type Lines: Iterator<Item = io::Result<String>>;

    /// Identifier shown in "Bad payload in fixture file at …" blocks.
    fn label(&self) -> String;

    fn open(&self) -> Result<Self::Lines, SourceError>;
}
