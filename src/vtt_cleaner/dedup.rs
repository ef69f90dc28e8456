/*!
 * Rolling deduplication of cleaned caption lines.
 *
 * Automatic captioning re-emits growing versions of the same utterance across
 * consecutive cues. The engine keeps every accepted line in two structures
 * that always hold the same content:
 * - `seen`: hash set used for exact-duplicate lookups
 * - `lines`: the output sequence in acceptance order, whose tail is the
 *   recency window for substring comparison
 *
 * Each incoming line is first turned into a `DedupDecision` against an
 * immutable view of that state, and only then is the decision applied.
 */

use std::collections::HashSet;

/// Number of recently accepted lines compared against a new line
pub const DEFAULT_RECENCY_WINDOW: usize = 20;

/// Outcome for a single cleaned line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupDecision {
    /// New line, appended to the transcript
    Accept,
    /// Exactly equal to a line already accepted
    RejectDuplicate,
    /// Contained in (or equal in length to) a recent line
    RejectPartial {
        /// Position in the output sequence of the line that covered it
        matched_index: usize,
    },
    /// Longer form of a recent line, which gets replaced
    Supersede {
        /// Position in the output sequence of the line being replaced
        superseded_index: usize,
    },
}

impl DedupDecision {
    /// Whether the incoming line ends up in the transcript
    pub fn is_accepted(&self) -> bool {
        matches!(self, DedupDecision::Accept | DedupDecision::Supersede { .. })
    }
}

/// Value-scoped dedup state for one cleaning run
#[derive(Debug, Clone)]
pub struct DedupEngine {
    seen: HashSet<String>,
    lines: Vec<String>,
    window: usize,
}

impl DedupEngine {
    /// Create an engine with the default 20-line recency window
    pub fn new() -> Self {
        Self::with_window(DEFAULT_RECENCY_WINDOW)
    }

    /// Create an engine with a custom recency window.
    ///
    /// A window of zero turns off substring comparison entirely.
    pub fn with_window(window: usize) -> Self {
        Self {
            seen: HashSet::new(),
            lines: Vec::new(),
            window,
        }
    }

    /// Recency window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Accepted lines so far, in transcript order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Decide what to do with `line` without touching any state.
    ///
    /// Window members are scanned oldest to newest and the first one in a
    /// substring relation with `line` settles the outcome, even when a later
    /// member would also match.
    pub fn decide(&self, line: &str) -> DedupDecision {
        if self.seen.contains(line) {
            return DedupDecision::RejectDuplicate;
        }

        let window_start = self.lines.len().saturating_sub(self.window);
        for (offset, prior) in self.lines[window_start..].iter().enumerate() {
            if !(prior.contains(line) || line.contains(prior.as_str())) {
                continue;
            }

            let index = window_start + offset;
            return if line.len() > prior.len() {
                DedupDecision::Supersede { superseded_index: index }
            } else {
                DedupDecision::RejectPartial { matched_index: index }
            };
        }

        DedupDecision::Accept
    }

    /// Decide on `line` and apply the decision
    pub fn push(&mut self, line: String) -> DedupDecision {
        let decision = self.decide(&line);

        match decision {
            DedupDecision::Accept => self.accept(line),
            DedupDecision::Supersede { superseded_index } => {
                let superseded = self.lines.remove(superseded_index);
                self.seen.remove(&superseded);
                debug_assert!(!self.lines.contains(&superseded));
                self.accept(line);
            }
            DedupDecision::RejectDuplicate | DedupDecision::RejectPartial { .. } => {}
        }

        decision
    }

    fn accept(&mut self, line: String) {
        self.seen.insert(line.clone());
        self.lines.push(line);
    }

    /// Consume the engine, returning the accepted lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Consume the engine, returning the lines joined with `\n`
    pub fn into_transcript(self) -> String {
        self.into_lines().join("\n")
    }
}

impl Default for DedupEngine {
    fn default() -> Self {
        Self::new()
    }
}
