use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::INPUT_ENV;

/// Represents an error that happened while copying entries from one file to another
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("input file '{}' not found; set {} or pass --input with the path to your .bib file", .path.display(), INPUT_ENV)]
    InputNotFound { path: PathBuf },

    #[error("cannot read '{}': {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

impl ExtractError {
    /// Fatal errors stop the process; the others are reported as zero entries extracted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }

    pub(crate) fn reading(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound { path },
            _ => Self::ReadInput { path, source },
        }
    }
}
