/*!
 * WebVTT caption cleaning.
 *
 * Turns raw auto-generated WebVTT text into a readable transcript in a single
 * pass: classify each line, strip inline tags from text lines, then let the
 * dedup engine collapse the rolling caption churn.
 *
 * - `classifier`: header / timing / blank / cue index / text tagging
 * - `stripper`: `<...>` markup removal
 * - `dedup`: exact and substring deduplication over a recency window
 *
 * Everything here is pure: no I/O, no shared state, and all state lives for
 * the duration of one call.
 */

pub mod classifier;
pub mod dedup;
pub mod stripper;

pub use classifier::{LineClassifier, LineKind, DEFAULT_HEADER_PREFIXES};
pub use dedup::{DedupDecision, DedupEngine, DEFAULT_RECENCY_WINDOW};
pub use stripper::strip_tags;

use std::fmt;

use crate::app_config::CleanerConfig;

/// Clean raw WebVTT text with the default settings.
///
/// Lines of the transcript are joined with `\n`; empty input gives an empty
/// string.
pub fn clean_vtt_content(vtt_content: &str) -> String {
    VttCleaner::default().clean(vtt_content)
}

/// Counters collected while cleaning one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub header_lines: usize,
    pub timing_lines: usize,
    pub blank_lines: usize,
    pub cue_index_lines: usize,
    /// Text lines with nothing left after tag stripping
    pub empty_after_strip: usize,
    pub duplicates_rejected: usize,
    pub partials_rejected: usize,
    pub superseded: usize,
    /// Lines in the final transcript
    pub output_lines: usize,
}

impl CleanStats {
    fn record_kind(&mut self, kind: LineKind) {
        match kind {
            LineKind::Header => self.header_lines += 1,
            LineKind::TimingCue => self.timing_lines += 1,
            LineKind::Blank => self.blank_lines += 1,
            LineKind::CueIndex => self.cue_index_lines += 1,
            LineKind::Text => {}
        }
    }

    fn record_decision(&mut self, decision: &DedupDecision) {
        match decision {
            DedupDecision::Accept => {}
            DedupDecision::RejectDuplicate => self.duplicates_rejected += 1,
            DedupDecision::RejectPartial { .. } => self.partials_rejected += 1,
            DedupDecision::Supersede { .. } => self.superseded += 1,
        }
    }

    /// Lines dropped by the dedup engine, superseded ones included
    pub fn total_removed(&self) -> usize {
        self.duplicates_rejected + self.partials_rejected + self.superseded
    }
}

impl fmt::Display for CleanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines kept, {} duplicates, {} partials, {} superseded (skipped: {} header, {} timing, {} blank, {} index, {} empty)",
            self.output_lines,
            self.duplicates_rejected,
            self.partials_rejected,
            self.superseded,
            self.header_lines,
            self.timing_lines,
            self.blank_lines,
            self.cue_index_lines,
            self.empty_after_strip
        )
    }
}

/// Transcript plus the counters gathered while producing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub transcript: String,
    pub stats: CleanStats,
}

/// Reusable, configured cleaner.
///
/// Holds only configuration; every call builds a fresh `DedupEngine`, so one
/// cleaner can be shared across threads.
#[derive(Debug, Clone)]
pub struct VttCleaner {
    classifier: LineClassifier,
    recency_window: usize,
}

impl VttCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self {
            classifier: LineClassifier::new(config.header_prefixes),
            recency_window: config.recency_window,
        }
    }

    pub fn recency_window(&self) -> usize {
        self.recency_window
    }

    /// Clean raw WebVTT text into a transcript
    pub fn clean(&self, vtt_content: &str) -> String {
        self.clean_with_stats(vtt_content).transcript
    }

    /// Clean raw WebVTT text, also returning what was skipped and removed
    pub fn clean_with_stats(&self, vtt_content: &str) -> CleanReport {
        let mut stats = CleanStats::default();
        let mut engine = DedupEngine::with_window(self.recency_window);

        for line in vtt_content.lines() {
            let kind = self.classifier.classify(line);
            if !kind.is_candidate() {
                stats.record_kind(kind);
                continue;
            }

            let Some(cleaned) = strip_tags(line) else {
                stats.empty_after_strip += 1;
                continue;
            };

            let decision = engine.push(cleaned);
            stats.record_decision(&decision);
        }

        stats.output_lines = engine.len();

        CleanReport {
            transcript: engine.into_transcript(),
            stats,
        }
    }
}

impl Default for VttCleaner {
    fn default() -> Self {
        Self::new(CleanerConfig::default())
    }
}
