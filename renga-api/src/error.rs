//! The closed error taxonomy surfaced at the crate boundary

use renga_core::ExtractError;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced by parser construction and read cycles
///
/// All kinds propagate unchanged to the caller; the driver's only local
/// action on a parse failure is releasing a managed source before
/// returning. An abort is not an error and never appears here.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid constructor options; no parser instance is produced
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The input source could not be resolved or read
    #[error("cannot read {path}: {message}")]
    Input {
        /// The offending path, or `<handle>` for borrowed sources
        path: String,
        /// The underlying I/O failure
        message: String,
    },

    /// The read argument cannot be resolved to a source
    #[error("unsupported read source: {0}")]
    BadSource(String),

    /// An extractor or continuation override failed during an active read
    #[error("parse failure at line {line}: {message}")]
    Parse {
        /// Physical-line count at the failure point
        line: usize,
        /// The extractor's failure message, unchanged
        message: String,
    },
}

impl Error {
    pub(crate) fn input(path: &Path, err: &std::io::Error) -> Self {
        Error::Input {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn handle(err: &std::io::Error) -> Self {
        Error::Input {
            path: "<handle>".to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(line: usize, err: ExtractError) -> Self {
        Error::Parse {
            line,
            message: err.into_message(),
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, Error>;
