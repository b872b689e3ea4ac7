//! Per-read session state

use crate::assembly::{Assembler, ContinuationMode};
use crate::records::RecordStore;

/// Ephemeral state scoped to one read cycle
///
/// Holds the physical-line counter, the abort flag, the continuation
/// assembler, and the record store. `reset` restores all four at the
/// start of every cycle; state never straddles two cycles.
#[derive(Debug)]
pub struct ReadSession<R> {
    lines: usize,
    aborted: bool,
    assembler: Assembler,
    records: RecordStore<R>,
}

impl<R> ReadSession<R> {
    /// Create a fresh session for the given continuation policy
    pub fn new(mode: ContinuationMode) -> Self {
        Self {
            lines: 0,
            aborted: false,
            assembler: Assembler::new(mode),
            records: RecordStore::new(),
        }
    }

    /// Restore the initial state; invoked once at the start of each cycle
    pub fn reset(&mut self) {
        self.lines = 0;
        self.aborted = false;
        self.assembler.reset();
        self.records.clear();
    }

    /// Count one physical line
    ///
    /// Exactly one increment per physical line, regardless of how the
    /// continuation policy groups them.
    pub fn count_line(&mut self) {
        self.lines += 1;
    }

    /// Physical lines consumed so far this cycle
    pub fn lines_parsed(&self) -> usize {
        self.lines
    }

    /// Request cooperative early termination; idempotent, never an error
    pub fn abort(&mut self) {
        self.aborted = true;
    }

    /// Whether an abort has been requested this cycle
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// The continuation assembler for this cycle
    pub fn assembler_mut(&mut self) -> &mut Assembler {
        &mut self.assembler
    }

    /// The record store
    pub fn records(&self) -> &RecordStore<R> {
        &self.records
    }

    /// Mutable access to the record store
    pub fn records_mut(&mut self) -> &mut RecordStore<R> {
        &mut self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session: ReadSession<String> = ReadSession::new(ContinuationMode::JoinNext);
        session.count_line();
        session.count_line();
        session.abort();
        session.records_mut().push("r".to_string());
        session
            .assembler_mut()
            .feed("partial", &crate::traits::LineCollector);

        session.reset();

        assert_eq!(session.lines_parsed(), 0);
        assert!(!session.aborted());
        assert!(session.records().is_empty());
        assert!(!session.assembler_mut().is_buffering());
    }

    #[test]
    fn test_abort_is_idempotent() {
        let mut session: ReadSession<()> = ReadSession::new(ContinuationMode::None);
        session.abort();
        session.abort();
        assert!(session.aborted());
    }
}
