//! Parser for blank-line-separated subtitle cue blocks (SRT).
//!
//! Each cue block is:
//! - line 0: sequence number (ignored)
//! - line 1: `"<start> --> <end>"` — only the start timestamp is used
//! - lines 2..: cue text, kept as ordered lines
//!
//! Malformed blocks are reported and skipped; parsing always continues
//! with the remaining blocks.

use confkit_shared::TranscriptChunk;

use crate::time::parse_timestamp;

/// Why a cue block could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CueDefect {
    /// Fewer than the 3 lines a cue needs (sequence, timing, text).
    TooFewLines,
    /// The start timestamp did not parse.
    BadTimestamp(String),
}

impl std::fmt::Display for CueDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewLines => write!(f, "fewer than 3 lines"),
            Self::BadTimestamp(msg) => write!(f, "bad timestamp: {msg}"),
        }
    }
}

/// A cue block that could not be parsed, with enough context to log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCue {
    /// Zero-based index among the document's non-empty blocks.
    pub index: usize,
    /// The offending block, verbatim.
    pub block: String,
    pub defect: CueDefect,
}

/// Result of parsing one subtitle document.
#[derive(Debug, Clone, Default)]
pub struct ParsedSrt {
    /// Well-formed cues, in document order.
    pub chunks: Vec<TranscriptChunk>,
    /// Blocks that were skipped, in document order.
    pub malformed: Vec<MalformedCue>,
}

/// Parse raw subtitle text into ordered transcript chunks.
///
/// Blocks are separated by blank lines; whitespace-only blocks are
/// skipped without being counted as malformed.
pub fn parse_srt(raw: &str) -> ParsedSrt {
    let mut parsed = ParsedSrt::default();

    let mut index = 0;
    for block in raw.split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }
        match parse_cue(block) {
            Ok(chunk) => parsed.chunks.push(chunk),
            Err(defect) => parsed.malformed.push(MalformedCue {
                index,
                block: block.to_string(),
                defect,
            }),
        }
        index += 1;
    }

    parsed
}

/// Parse one cue block.
fn parse_cue(block: &str) -> Result<TranscriptChunk, CueDefect> {
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.len() < 3 {
        return Err(CueDefect::TooFewLines);
    }

    // Line 1 is "<start> --> <end>"; only the start matters.
    let timestamp = lines[1]
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    let timestamp_s =
        parse_timestamp(&timestamp).map_err(|e| CueDefect::BadTimestamp(e.to_string()))?;

    // A block at the end of the document carries the final newline;
    // drop the resulting trailing empty lines.
    let mut text: Vec<String> = lines[2..].iter().map(|l| l.to_string()).collect();
    while text.last().is_some_and(|l| l.trim().is_empty()) {
        text.pop();
    }

    Ok(TranscriptChunk {
        text,
        timestamp,
        timestamp_s,
    })
}
