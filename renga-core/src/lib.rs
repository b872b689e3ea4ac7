//! Deterministic core of the renga line-oriented parser base
//!
//! This crate holds the I/O-free pieces: the continuation-policy state
//! machine that reassembles physical lines into logical lines, the ordered
//! record store, per-read session state, and the extractor extension point.
//! Source resolution and the read driver live in `renga-api`.

#![warn(missing_docs)]

pub mod assembly;
pub mod error;
pub mod records;
pub mod session;
pub mod traits;

// Re-export key types
pub use assembly::{Assembler, ContinuationMode, ContinuationRules};
pub use error::{ExtractError, Result};
pub use records::RecordStore;
pub use session::ReadSession;
pub use traits::{Context, Extractor, LineCollector};
