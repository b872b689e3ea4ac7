//! Continuation-policy state machine
//!
//! Consumes one physical line at a time and decides, per the active
//! policy, whether a completed logical line is ready now or more input
//! must be buffered.

/// Multi-line continuation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinuationMode {
    /// Every physical line is its own logical line
    #[default]
    None,
    /// The current logical line keeps absorbing physical lines while the
    /// continuation predicate holds
    JoinNext,
    /// An incoming physical line either continues the previous logical
    /// line or starts a new one
    JoinLast,
}

impl ContinuationMode {
    /// Parse a mode from its string code
    ///
    /// Returns `None` for unrecognized codes; the api layer turns that
    /// into a configuration error.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "none" => Some(ContinuationMode::None),
            "join_next" => Some(ContinuationMode::JoinNext),
            "join_last" => Some(ContinuationMode::JoinLast),
            _ => None,
        }
    }

    /// String code for this mode
    pub fn code(&self) -> &'static str {
        match self {
            ContinuationMode::None => "none",
            ContinuationMode::JoinNext => "join_next",
            ContinuationMode::JoinLast => "join_last",
        }
    }
}

/// Predicate and join extension points governing logical-line assembly
pub trait ContinuationRules {
    /// Whether the given physical line continues a logical line
    ///
    /// The default returns `true` unconditionally; a `JoinNext` consumer
    /// must override it, or the entire remaining input collapses into a
    /// single logical line emitted only at end of input.
    fn is_continued(&self, line: &str) -> bool {
        let _ = line;
        true
    }

    /// Merge a buffered logical line with the next physical line
    ///
    /// The default is plain concatenation with no separator and no
    /// stripping; overrides typically strip continuation markers and
    /// insert an appropriate separator.
    fn join(&self, previous: &str, current: &str) -> String {
        let mut joined = String::with_capacity(previous.len() + current.len());
        joined.push_str(previous);
        joined.push_str(current);
        joined
    }
}

/// Per-session continuation state machine
///
/// Logical lines come out in the order their first constituent physical
/// line went in; no policy reorders or interleaves.
#[derive(Debug)]
pub struct Assembler {
    mode: ContinuationMode,
    buffer: Option<String>,
}

impl Assembler {
    /// Create an assembler for the given policy
    pub fn new(mode: ContinuationMode) -> Self {
        Self { mode, buffer: None }
    }

    /// The active policy
    pub fn mode(&self) -> ContinuationMode {
        self.mode
    }

    /// Consume one physical line, yielding a completed logical line when
    /// the policy says one is ready
    pub fn feed(&mut self, line: &str, rules: &dyn ContinuationRules) -> Option<String> {
        match self.mode {
            ContinuationMode::None => Some(line.to_string()),
            ContinuationMode::JoinNext => {
                let merged = match self.buffer.take() {
                    Some(buffer) => rules.join(&buffer, line),
                    None => line.to_string(),
                };
                if rules.is_continued(line) {
                    self.buffer = Some(merged);
                    None
                } else {
                    Some(merged)
                }
            }
            ContinuationMode::JoinLast => match self.buffer.take() {
                // The first line of a session always starts a new buffer;
                // the predicate is not consulted for it.
                None => {
                    self.buffer = Some(line.to_string());
                    None
                }
                Some(buffer) => {
                    if rules.is_continued(line) {
                        self.buffer = Some(rules.join(&buffer, line));
                        None
                    } else {
                        self.buffer = Some(line.to_string());
                        Some(buffer)
                    }
                }
            },
        }
    }

    /// Forced emission of the pending buffer at end of input
    pub fn flush(&mut self) -> Option<String> {
        self.buffer.take()
    }

    /// Whether a partial logical line is pending
    pub fn is_buffering(&self) -> bool {
        self.buffer.is_some()
    }

    /// Drop any pending state
    pub fn reset(&mut self) {
        self.buffer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Default predicates and join
    struct Defaults;

    impl ContinuationRules for Defaults {}

    /// Trailing-backslash continuation with marker stripping
    struct Backslash;

    impl ContinuationRules for Backslash {
        fn is_continued(&self, line: &str) -> bool {
            line.ends_with('\\')
        }

        fn join(&self, previous: &str, current: &str) -> String {
            format!("{} {}", previous.trim_end_matches('\\'), current)
        }
    }

    #[test]
    fn test_mode_codes_round_trip() {
        for mode in [
            ContinuationMode::None,
            ContinuationMode::JoinNext,
            ContinuationMode::JoinLast,
        ] {
            assert_eq!(ContinuationMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(ContinuationMode::from_code("join_both"), None);
    }

    #[test]
    fn test_assembler_reports_its_mode() {
        let assembler = Assembler::new(ContinuationMode::JoinNext);
        assert_eq!(assembler.mode(), ContinuationMode::JoinNext);
    }

    #[test]
    fn test_none_mode_never_buffers() {
        let mut assembler = Assembler::new(ContinuationMode::None);
        assert_eq!(assembler.feed("a", &Defaults), Some("a".to_string()));
        assert_eq!(assembler.feed("b", &Defaults), Some("b".to_string()));
        assert!(!assembler.is_buffering());
        assert_eq!(assembler.flush(), None);
    }

    #[test]
    fn test_join_next_defers_while_continued() {
        let mut assembler = Assembler::new(ContinuationMode::JoinNext);
        assert_eq!(assembler.feed("keep going\\", &Backslash), None);
        assert!(assembler.is_buffering());
        assert_eq!(
            assembler.feed("done", &Backslash),
            Some("keep going done".to_string())
        );
        assert!(!assembler.is_buffering());
    }

    #[test]
    fn test_join_next_default_collapses_until_flush() {
        let mut assembler = Assembler::new(ContinuationMode::JoinNext);
        assert_eq!(assembler.feed("a", &Defaults), None);
        assert_eq!(assembler.feed("b", &Defaults), None);
        assert_eq!(assembler.flush(), Some("ab".to_string()));
    }

    #[test]
    fn test_join_last_first_line_starts_buffer() {
        struct NeverContinued;
        impl ContinuationRules for NeverContinued {
            fn is_continued(&self, _line: &str) -> bool {
                false
            }
        }

        let mut assembler = Assembler::new(ContinuationMode::JoinLast);
        // Even with a predicate that always says "no", line 1 is buffered.
        assert_eq!(assembler.feed("first", &NeverContinued), None);
        assert_eq!(
            assembler.feed("second", &NeverContinued),
            Some("first".to_string())
        );
        assert_eq!(assembler.flush(), Some("second".to_string()));
    }

    #[test]
    fn test_join_last_merges_continued_lines() {
        let mut assembler = Assembler::new(ContinuationMode::JoinLast);
        assert_eq!(assembler.feed("a", &Defaults), None);
        assert_eq!(assembler.feed("b", &Defaults), None);
        assert_eq!(assembler.feed("c", &Defaults), None);
        assert_eq!(assembler.flush(), Some("abc".to_string()));
    }

    #[test]
    fn test_reset_drops_pending_buffer() {
        let mut assembler = Assembler::new(ContinuationMode::JoinNext);
        assembler.feed("pending", &Defaults);
        assembler.reset();
        assert!(!assembler.is_buffering());
        assert_eq!(assembler.flush(), None);
    }
}
