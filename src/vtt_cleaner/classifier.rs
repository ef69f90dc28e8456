/*!
 * Line classification for raw WebVTT input.
 *
 * Each raw line is looked at on its own, with no lookahead, and tagged as
 * either something to skip (header, timing cue, blank, cue index) or a
 * candidate text line that moves on to tag stripping.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Timing cue at the start of a line; trailing cue settings are ignored
static TIMING_CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}\.\d{3} --> \d{2}:\d{2}:\d{2}\.\d{3}")
        .expect("Invalid timing cue regex")
});

/// Cue sequence number
static CUE_INDEX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+$").expect("Invalid cue index regex")
});

/// Header prefixes recognized when no configuration is given
pub const DEFAULT_HEADER_PREFIXES: [&str; 3] = ["WEBVTT", "Kind:", "Language:"];

/// What a single raw line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `WEBVTT` marker or a metadata line such as `Kind:` / `Language:`
    Header,
    /// `HH:MM:SS.mmm --> HH:MM:SS.mmm` timing line
    TimingCue,
    /// Empty or whitespace-only
    Blank,
    /// Digits only
    CueIndex,
    /// Anything else
    Text,
}

impl LineKind {
    /// Whether the line goes on to tag stripping
    pub fn is_candidate(self) -> bool {
        matches!(self, LineKind::Text)
    }
}

/// Classifies raw lines against a set of header prefixes
#[derive(Debug, Clone)]
pub struct LineClassifier {
    header_prefixes: Vec<String>,
}

impl LineClassifier {
    /// Create a classifier with custom header prefixes
    pub fn new(header_prefixes: Vec<String>) -> Self {
        Self { header_prefixes }
    }

    /// Header prefixes this classifier skips
    pub fn header_prefixes(&self) -> &[String] {
        &self.header_prefixes
    }

    /// Classify one raw line.
    ///
    /// Header and timing checks look at the raw line; the blank and cue index
    /// checks look at the trimmed line. The first matching rule wins.
    pub fn classify(&self, line: &str) -> LineKind {
        if self.header_prefixes.iter().any(|prefix| line.starts_with(prefix.as_str())) {
            return LineKind::Header;
        }

        if TIMING_CUE_REGEX.is_match(line) {
            return LineKind::TimingCue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if CUE_INDEX_REGEX.is_match(trimmed) {
            return LineKind::CueIndex;
        }

        LineKind::Text
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_PREFIXES.iter().map(|p| p.to_string()).collect())
    }
}
