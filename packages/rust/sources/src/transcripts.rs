//! File-backed transcript sources.
//!
//! The structured source holds one JSON chunk file per video id; the
//! raw source holds one SRT file per speaker under the event's
//! directory. Lookups are reads with no side effects; a missing file is
//! a negative result. Unreadable or malformed files are logged and
//! treated as absent — transcript lookup must never fail a build.

use std::path::PathBuf;

use tracing::warn;

use confkit_shared::{Transcript, TranscriptChunk};
use confkit_transcript::{ChunkSource, SubtitleSource};

/// Structured transcript source: `<dir>/<video_id>.json`, containing a
/// JSON array of chunks.
#[derive(Debug, Clone)]
pub struct FileChunkSource {
    dir: PathBuf,
}

impl FileChunkSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ChunkSource for FileChunkSource {
    fn transcript_for(&self, video_id: &str) -> Option<Transcript> {
        if video_id.is_empty() {
            return None;
        }
        let path = self.dir.join(format!("{video_id}.json"));
        let content = std::fs::read_to_string(&path).ok()?;

        match serde_json::from_str::<Vec<TranscriptChunk>>(&content) {
            Ok(chunks) => Some(Transcript::new(chunks)),
            Err(e) => {
                warn!(?path, error = %e, "ignoring malformed transcript file");
                None
            }
        }
    }
}

/// Raw subtitle source: `<dir>/<event_short_url>/<speaker>.srt`.
#[derive(Debug, Clone)]
pub struct FileSubtitleSource {
    dir: PathBuf,
}

impl FileSubtitleSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SubtitleSource for FileSubtitleSource {
    fn subtitles_for(&self, speaker: &str, event_short_url: &str) -> Option<String> {
        if speaker.is_empty() || event_short_url.is_empty() {
            return None;
        }
        let path = self
            .dir
            .join(event_short_url)
            .join(format!("{speaker}.srt"));
        std::fs::read_to_string(path).ok()
    }
}
