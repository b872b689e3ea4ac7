//! Extraction error type (deterministic only)

use core::fmt;

/// Failure raised by an extractor while converting a logical line
///
/// Carries a human-readable message; the api layer attaches the line
/// number at the failure site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    message: String,
}

impl ExtractError {
    /// Create an error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error, yielding its message
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "extraction failed: {}", self.message)
    }
}

impl std::error::Error for ExtractError {}

/// Result type for extraction
pub type Result<T> = core::result::Result<T, ExtractError>;
