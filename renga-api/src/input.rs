//! Source resolution: managed files vs borrowed handles

use std::fmt;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// One read cycle's input source
///
/// A `Path` source is managed: the driver opens the file, owns the
/// handle, and releases it on every exit path (success, abort, or
/// error). A `Handle` source is borrowed: the caller keeps ownership
/// and the driver never closes it, so the handle stays usable after the
/// read returns.
pub enum Source<'a> {
    /// Re-read the most recently bound path
    ///
    /// Fails as a bad-read-input if no path is bound, either because the
    /// parser is fresh or because the last read used a borrowed handle.
    Bound,
    /// Open the file at this path (managed)
    Path(PathBuf),
    /// Read from a caller-owned handle (borrowed)
    Handle(&'a mut dyn BufRead),
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Bound => f.write_str("Bound"),
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::Handle(_) => f.debug_tuple("Handle").field(&"<handle>").finish(),
        }
    }
}

impl<'a> Source<'a> {
    /// Managed source for the file at `path`
    pub fn path<P: Into<PathBuf>>(path: P) -> Self {
        Source::Path(path.into())
    }

    /// Borrowed source over a caller-owned handle
    pub fn handle<R: BufRead>(reader: &'a mut R) -> Self {
        Source::Handle(reader)
    }
}

impl<'a> From<&str> for Source<'a> {
    fn from(path: &str) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl<'a> From<String> for Source<'a> {
    fn from(path: String) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl<'a> From<&Path> for Source<'a> {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl<'a> From<PathBuf> for Source<'a> {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl<'a, R: BufRead> From<&'a mut R> for Source<'a> {
    fn from(reader: &'a mut R) -> Self {
        Source::Handle(reader)
    }
}
