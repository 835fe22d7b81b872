//! Chooses the best-available transcript for a talk.
//!
//! Two collaborators are probed in priority order: a structured source
//! keyed by video identifier (already chunked, used as-is), then a raw
//! subtitle source keyed by speaker name + event identifier, whose text
//! is run through the subtitle parser. Absence from both is a negative
//! result, never an error.

use tracing::warn;

use confkit_shared::Transcript;

use crate::srt::parse_srt;

/// Structured transcript lookup by video identifier.
pub trait ChunkSource {
    /// Return the pre-chunked transcript for a video, if one exists.
    fn transcript_for(&self, video_id: &str) -> Option<Transcript>;
}

/// Raw subtitle lookup by speaker name and event identifier.
pub trait SubtitleSource {
    /// Return the raw subtitle text for a speaker at an event, if any.
    fn subtitles_for(&self, speaker: &str, event_short_url: &str) -> Option<String>;
}

/// Resolve a talk's transcript: structured source first, raw subtitles
/// second, `None` when neither has content.
pub fn resolve_transcript(
    chunks: &dyn ChunkSource,
    subtitles: &dyn SubtitleSource,
    video_id: &str,
    speaker: &str,
    event_short_url: &str,
) -> Option<Transcript> {
    if let Some(transcript) = chunks.transcript_for(video_id) {
        if !transcript.is_empty() {
            return Some(transcript);
        }
    }

    let raw = subtitles.subtitles_for(speaker, event_short_url)?;
    let parsed = parse_srt(&raw);
    for cue in &parsed.malformed {
        warn!(
            speaker,
            event = event_short_url,
            block_index = cue.index,
            defect = %cue.defect,
            "skipping malformed subtitle cue"
        );
    }

    if parsed.chunks.is_empty() {
        return None;
    }
    Some(Transcript::new(parsed.chunks))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use confkit_shared::TranscriptChunk;

    use super::*;

    struct MapChunkSource(HashMap<String, Transcript>);

    impl ChunkSource for MapChunkSource {
        fn transcript_for(&self, video_id: &str) -> Option<Transcript> {
            self.0.get(video_id).cloned()
        }
    }

    struct MapSubtitleSource(HashMap<(String, String), String>);

    impl SubtitleSource for MapSubtitleSource {
        fn subtitles_for(&self, speaker: &str, event_short_url: &str) -> Option<String> {
            self.0
                .get(&(speaker.to_string(), event_short_url.to_string()))
                .cloned()
        }
    }

    fn chunk(text: &str, seconds: f64) -> TranscriptChunk {
        TranscriptChunk {
            text: vec![text.to_string()],
            timestamp: "00:00:00,000".into(),
            timestamp_s: seconds,
        }
    }

    fn empty_sources() -> (MapChunkSource, MapSubtitleSource) {
        (
            MapChunkSource(HashMap::new()),
            MapSubtitleSource(HashMap::new()),
        )
    }

    #[test]
    fn structured_source_wins() {
        let (mut chunks, mut subs) = empty_sources();
        chunks.0.insert(
            "vid123".into(),
            Transcript::new(vec![chunk("from structured source", 0.0)]),
        );
        subs.0.insert(
            ("Ada".into(), "cloudscale2024".into()),
            "1\n00:00:00,000 --> 00:00:01,000\nfrom subtitles\n".into(),
        );

        let result = resolve_transcript(&chunks, &subs, "vid123", "Ada", "cloudscale2024")
            .expect("transcript");
        assert_eq!(result.chunks[0].text, vec!["from structured source"]);
    }

    #[test]
    fn empty_structured_result_falls_through_to_subtitles() {
        let (mut chunks, mut subs) = empty_sources();
        chunks.0.insert("vid123".into(), Transcript::default());
        subs.0.insert(
            ("Ada".into(), "cloudscale2024".into()),
            "1\n00:00:00,000 --> 00:00:01,000\nfrom subtitles\n".into(),
        );

        let result = resolve_transcript(&chunks, &subs, "vid123", "Ada", "cloudscale2024")
            .expect("transcript");
        assert_eq!(result.chunks[0].text, vec!["from subtitles"]);
    }

    #[test]
    fn neither_source_means_none() {
        let (chunks, subs) = empty_sources();
        assert!(resolve_transcript(&chunks, &subs, "vid123", "Ada", "cloudscale2024").is_none());
    }

    #[test]
    fn unparseable_subtitles_mean_none() {
        let (chunks, mut subs) = empty_sources();
        subs.0.insert(
            ("Ada".into(), "cloudscale2024".into()),
            "garbage without any cue structure".into(),
        );
        assert!(resolve_transcript(&chunks, &subs, "vid123", "Ada", "cloudscale2024").is_none());
    }
}
