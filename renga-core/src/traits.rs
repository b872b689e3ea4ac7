//! Extractor extension point and its session handle

use crate::assembly::ContinuationRules;
use crate::error::Result;
use crate::session::ReadSession;

/// Handle through which an extractor reaches the live read session
///
/// Scoped to one extractor invocation. Lets a strategy store records,
/// inspect earlier ones, and request cooperative early termination.
pub struct Context<'a, R> {
    session: &'a mut ReadSession<R>,
}

impl<'a, R> Context<'a, R> {
    /// Wrap a session for the duration of one extractor invocation
    pub fn new(session: &'a mut ReadSession<R>) -> Self {
        Self { session }
    }

    /// Append a record to the store
    pub fn save_record(&mut self, record: R) {
        self.session.records_mut().push(record);
    }

    /// Remove and return the newest record
    pub fn pop_record(&mut self) -> Option<R> {
        self.session.records_mut().pop()
    }

    /// Peek at the newest record
    pub fn last_record(&self) -> Option<&R> {
        self.session.records().last()
    }

    /// Ordered view of everything stored so far this cycle
    pub fn records(&self) -> &[R] {
        self.session.records().all()
    }

    /// Physical lines consumed so far this cycle
    pub fn lines_parsed(&self) -> usize {
        self.session.lines_parsed()
    }

    /// Stop the read after this invocation returns
    ///
    /// Idempotent and never fails; lines past the current one are never
    /// pulled from the source. An abort is not an error.
    pub fn abort(&mut self) {
        self.session.abort();
    }

    /// Whether an abort has been requested this cycle
    pub fn aborted(&self) -> bool {
        self.session.aborted()
    }
}

/// Strategy converting one logical line into stored records
///
/// The continuation predicates come from the [`ContinuationRules`]
/// supertrait, so a format-specific parser overrides `is_continued` and
/// `join` alongside `extract` on one type.
pub trait Extractor: ContinuationRules {
    /// Record type produced by this strategy
    type Record;

    /// Convert one logical line, saving zero or more records
    ///
    /// Errors propagate unchanged to the caller of the read cycle;
    /// records saved before the failure stay in the store.
    fn extract(&mut self, line: &str, ctx: &mut Context<'_, Self::Record>) -> Result<()>;
}

/// Default extractor: stores each logical line itself, unmodified
///
/// A format-specific strategy that wants this base behavior calls
/// `ctx.save_record` explicitly; nothing dispatches back here implicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCollector;

impl ContinuationRules for LineCollector {}

impl Extractor for LineCollector {
    type Record = String;

    fn extract(&mut self, line: &str, ctx: &mut Context<'_, String>) -> Result<()> {
        ctx.save_record(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::ContinuationMode;

    #[test]
    fn test_line_collector_saves_line_unmodified() {
        let mut session = ReadSession::new(ContinuationMode::None);
        let mut collector = LineCollector;

        collector
            .extract("as it came in\n", &mut Context::new(&mut session))
            .unwrap();

        assert_eq!(session.records().all(), &["as it came in\n"]);
    }

    #[test]
    fn test_context_exposes_session_queries() {
        let mut session = ReadSession::new(ContinuationMode::None);
        session.count_line();
        let mut ctx = Context::new(&mut session);

        ctx.save_record(1);
        ctx.save_record(2);
        assert_eq!(ctx.lines_parsed(), 1);
        assert_eq!(ctx.last_record(), Some(&2));
        assert_eq!(ctx.pop_record(), Some(2));
        assert_eq!(ctx.records(), &[1]);

        assert!(!ctx.aborted());
        ctx.abort();
        assert!(ctx.aborted());
    }
}
