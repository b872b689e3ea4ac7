//! Public API for the renga line-oriented parser base
//!
//! renga does the mundane bookkeeping of line-oriented text parsing:
//! pulling physical lines from a source, counting them, reassembling
//! continuation lines into logical lines, and storing produced records.
//! A format-specific parser supplies only an [`Extractor`] that turns
//! one logical line into a record.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use renga_core::ReadSession;
use tracing::{debug, trace};

// Re-export key types
pub use config::{Config, ConfigBuilder, Setting, SettingValue};
pub use error::{Error, Result};
pub use input::Source;
pub use renga_core::{
    Context, ContinuationMode, ContinuationRules, ExtractError, Extractor, LineCollector,
};

/// Line-oriented parser driving one extraction strategy
///
/// Holds the immutable settings, the strategy, the last-bound path, and
/// the per-read session state (line counter, abort flag, continuation
/// buffer, record store). One [`Parser::read`] call is one full cycle;
/// the session is reset at the start of every cycle and its record
/// store stays queryable afterwards.
pub struct Parser<X: Extractor = LineCollector> {
    config: Config,
    extractor: X,
    bound: Option<PathBuf>,
    session: ReadSession<X::Record>,
}

impl Parser<LineCollector> {
    /// Parser with default settings and the line-collecting strategy
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Parser with the given settings and the line-collecting strategy
    pub fn with_config(config: Config) -> Self {
        Self::with_extractor(config, LineCollector)
    }
}

impl Default for Parser<LineCollector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: Extractor> Parser<X> {
    /// Parser with the given settings and extraction strategy
    pub fn with_extractor(config: Config, extractor: X) -> Self {
        let session = ReadSession::new(config.multiline());
        Self {
            config,
            extractor,
            bound: None,
            session,
        }
    }

    /// Run one full read cycle over the given source
    ///
    /// Replaces the entire record store for this instance. Returns
    /// normally on end of input or on a cooperative abort from the
    /// extractor; any source-resolution or extraction error propagates
    /// unchanged, with records produced before the failure left
    /// retrievable. A managed file handle is released on every exit
    /// path; a borrowed handle is never closed.
    pub fn read<'a>(&mut self, source: impl Into<Source<'a>>) -> Result<()> {
        match source.into() {
            Source::Bound => {
                let path = self.bound.clone().ok_or_else(|| {
                    Error::BadSource("no source bound to this parser".to_string())
                })?;
                self.read_path(&path)
            }
            Source::Path(path) => self.read_path(&path),
            Source::Handle(handle) => {
                // A borrowed handle clears the bound path; the two source
                // identities are mutually exclusive.
                self.bound = None;
                debug!("reading borrowed source");
                self.drive(handle)
            }
        }
    }

    fn read_path(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|err| Error::input(path, &err))?;
        self.bound = Some(path.to_path_buf());
        debug!(path = %path.display(), "reading managed source");
        // The handle is scoped to this call; dropping it on any exit
        // path closes the file.
        let mut reader = BufReader::new(file);
        self.drive(&mut reader)
    }

    fn drive(&mut self, source: &mut dyn BufRead) -> Result<()> {
        self.session.reset();
        let mut raw = String::new();
        loop {
            raw.clear();
            let n = match source.read_line(&mut raw) {
                Ok(n) => n,
                Err(err) => return Err(self.read_failure(&err)),
            };
            if n == 0 {
                // End of input: the pending continuation buffer is
                // force-flushed through the extractor.
                if let Some(line) = self.session.assembler_mut().flush() {
                    self.invoke_extractor(&line)?;
                }
                break;
            }
            self.session.count_line();
            let line = if self.config.auto_chomp() {
                chomp(&raw)
            } else {
                raw.as_str()
            };
            if let Some(line) = self.session.assembler_mut().feed(line, &self.extractor) {
                self.invoke_extractor(&line)?;
                if self.session.aborted() {
                    // Cooperative stop: later physical lines are never
                    // pulled and a partial buffer stays unflushed.
                    debug!(lines = self.session.lines_parsed(), "read aborted");
                    break;
                }
            }
        }
        debug!(
            lines = self.session.lines_parsed(),
            records = self.session.records().len(),
            "read cycle finished"
        );
        Ok(())
    }

    fn invoke_extractor(&mut self, line: &str) -> Result<()> {
        trace!(line, "logical line emitted");
        let outcome = {
            let mut ctx = Context::new(&mut self.session);
            self.extractor.extract(line, &mut ctx)
        };
        outcome.map_err(|err| Error::parse(self.session.lines_parsed(), err))
    }

    fn read_failure(&self, err: &std::io::Error) -> Error {
        match &self.bound {
            Some(path) => Error::input(path, err),
            None => Error::handle(err),
        }
    }

    /// Ordered view of the records produced by the last read cycle
    pub fn records(&self) -> &[X::Record] {
        self.session.records().all()
    }

    /// Peek at the newest record
    pub fn last_record(&self) -> Option<&X::Record> {
        self.session.records().last()
    }

    /// Remove and return the newest record
    pub fn pop_record(&mut self) -> Option<X::Record> {
        self.session.records_mut().pop()
    }

    /// Drain the record store
    pub fn take_records(&mut self) -> Vec<X::Record> {
        self.session.records_mut().take()
    }

    /// Physical lines consumed by the current or last read cycle
    pub fn lines_parsed(&self) -> usize {
        self.session.lines_parsed()
    }

    /// Whether the last read cycle stopped on a cooperative abort
    ///
    /// Persists until the next read resets it.
    pub fn aborted(&self) -> bool {
        self.session.aborted()
    }

    /// The immutable settings
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up a setting by its recognized name
    pub fn setting(&self, name: &str) -> Option<SettingValue> {
        self.config.setting(name)
    }

    /// The most recently bound managed path, if any
    pub fn bound_path(&self) -> Option<&Path> {
        self.bound.as_deref()
    }

    /// The extraction strategy
    pub fn extractor(&self) -> &X {
        &self.extractor
    }

    /// Mutable access to the extraction strategy
    pub fn extractor_mut(&mut self) -> &mut X {
        &mut self.extractor
    }
}

/// Strip one trailing line terminator: `\n`, with a preceding `\r` if any
fn chomp(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

// Convenience functions

/// Read a file with the default collector, one chomped record per line
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let config = Config::builder().auto_chomp(true).build()?;
    let mut parser = Parser::with_config(config);
    parser.read(path.as_ref())?;
    Ok(parser.take_records())
}

/// Read a caller-owned handle with the default collector
///
/// The handle stays open; only the consumed portion is gone.
pub fn parse_lines<R: BufRead>(reader: &mut R) -> Result<Vec<String>> {
    let config = Config::builder().auto_chomp(true).build()?;
    let mut parser = Parser::with_config(config);
    parser.read(reader)?;
    Ok(parser.take_records())
}
