//! Subtitle parsing and transcript resolution for confkit.
//!
//! - [`time::parse_timestamp`] — `HH:MM:SS[,frac]` → seconds
//! - [`srt::parse_srt`] — raw subtitle text → ordered [`TranscriptChunk`]s
//! - [`resolver`] — picks the best-available transcript for a talk
//!
//! [`TranscriptChunk`]: confkit_shared::TranscriptChunk

pub mod resolver;
pub mod srt;
pub mod time;

pub use resolver::{ChunkSource, SubtitleSource, resolve_transcript};
pub use srt::{CueDefect, MalformedCue, ParsedSrt, parse_srt};
pub use time::parse_timestamp;
