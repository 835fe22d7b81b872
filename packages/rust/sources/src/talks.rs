//! The talk source: ordered talk records per event.

use std::path::PathBuf;

use confkit_shared::{ConfkitError, Result, TalkRecord};

/// Supplies the ordered talk records for an event, given the event's
/// data-location token. Failures are surfaced as errors; the
/// orchestrator decides how to degrade.
pub trait TalkSource {
    fn talks_for(&self, talks_path: &str) -> Result<Vec<TalkRecord>>;
}

/// Talk source reading a JSON array of records per event from a data
/// directory.
#[derive(Debug, Clone)]
pub struct JsonTalkSource {
    data_dir: PathBuf,
}

impl JsonTalkSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl TalkSource for JsonTalkSource {
    fn talks_for(&self, talks_path: &str) -> Result<Vec<TalkRecord>> {
        let path = self.data_dir.join(talks_path);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfkitError::talk_source(&path, e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| ConfkitError::talk_source(&path, format!("malformed content: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_source() -> JsonTalkSource {
        JsonTalkSource::new("../../../fixtures/data")
    }

    #[test]
    fn reads_ordered_records() {
        let talks = fixture_source()
            .talks_for("talks/cloudscale2024.json")
            .expect("read talks");
        assert_eq!(talks.len(), 4);
        assert_eq!(talks[0].title, "Opening Keynote: The Road to Planet Scale");
        assert!(talks[0].is_featured());
        assert_eq!(talks[2].track.as_deref(), Some("platform"));
    }

    #[test]
    fn missing_file_is_a_talk_source_error() {
        let err = fixture_source().talks_for("talks/none.json").unwrap_err();
        assert!(matches!(err, ConfkitError::TalkSource { .. }));
    }

    #[test]
    fn malformed_content_is_a_talk_source_error() {
        let err = fixture_source()
            .talks_for("talks/malformed.json")
            .unwrap_err();
        let ConfkitError::TalkSource { message, .. } = err else {
            panic!("expected TalkSource error");
        };
        assert!(message.contains("malformed content"));
    }
}
