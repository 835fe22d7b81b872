//! Core domain types for the confkit event catalog.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default talk length in minutes when a record carries no usable duration.
pub const DEFAULT_TALK_DURATION_MIN: u32 = 30;

/// Track name assigned to talks whose record has no track field.
pub const DEFAULT_TRACK: &str = "other";

// ---------------------------------------------------------------------------
// Catalog (raw input)
// ---------------------------------------------------------------------------

/// The event catalog as loaded from `catalog.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Public URL prefix events are published under.
    pub base_path: String,
    /// Ordered list of event records.
    pub events: Vec<EventRecord>,
}

/// One sponsor tier with its sponsor names, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorTier {
    /// Tier name (e.g., "platinum", "gold").
    pub tier: String,
    /// Sponsor names within the tier.
    pub names: Vec<String>,
}

/// A single event as declared in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Display name.
    pub name: String,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Short identifier, encoding the year in its last 4 characters.
    /// Absent for externally-hosted events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// Full URL for externally-hosted events (replaces `base_path` + slug).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Data-location token for the talk source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talks_path: Option<String>,
    /// Candidate thumbnail filename, resolved against the assets root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Date on which recorded videos become public.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos_reveal_date: Option<NaiveDate>,
    /// Length of the pre-roll premiere block in minutes.
    #[serde(default)]
    pub premiere_duration: u32,
    /// Sponsor tiers in catalog order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sponsors: Vec<SponsorTier>,
}

// ---------------------------------------------------------------------------
// Event (enriched)
// ---------------------------------------------------------------------------

/// A cross-year link to another edition of the same event series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionRef {
    /// Year of the linked edition.
    pub year: String,
    /// Short identifier of the linked edition.
    pub short_url: String,
}

/// An event with all derived fields populated by the enrichment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talks_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos_reveal_date: Option<NaiveDate>,
    pub premiere_duration: u32,
    pub sponsors: Vec<SponsorTier>,

    /// The date's year, as a string for templating.
    pub year: String,
    /// Public URL (external, or `base_path` + `short_url`).
    pub url: String,
    /// Resolved thumbnail path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,
    /// Whether the call for papers has closed.
    pub cfp_closed: bool,
    /// Whether recorded videos are public yet.
    pub reveal_videos: bool,
    /// Other editions of the same series, ascending by year.
    pub other_editions: Vec<EditionRef>,

    /// Talks flagged as featured (keynotes).
    pub talks_featured: Vec<Talk>,
    /// Talks flagged as panels (and not featured).
    pub talks_panel: Vec<Talk>,
    /// Remaining talks, laid out per track.
    pub talks: Vec<Talk>,
    /// Unique track names in order of first appearance.
    pub tracks_ordered: Vec<String>,

    /// Schedule start (the day anchor).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talks_start: Option<DateTime<Utc>>,
    /// Latest end time across all tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talks_end: Option<DateTime<Utc>>,
    /// Minutes from schedule start to the overall end.
    pub talks_end_offset: i64,
    /// Start of the hallway hour preceding the schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hallway_start: Option<DateTime<Utc>>,
    /// End of the hallway hour (equals the schedule start).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hallway_end: Option<DateTime<Utc>>,
}

impl Event {
    /// Lift a catalog record into an event with derived fields at their
    /// pre-enrichment defaults. `year` is the only field computed here.
    pub fn from_record(record: EventRecord) -> Self {
        let year = record.date.format("%Y").to_string();
        Self {
            name: record.name,
            date: record.date,
            short_url: record.short_url,
            external_url: record.external_url,
            talks_path: record.talks_path,
            videos_reveal_date: record.videos_reveal_date,
            premiere_duration: record.premiere_duration,
            sponsors: record.sponsors,
            year,
            url: String::new(),
            thumbnail_path: record.thumbnail,
            cfp_closed: false,
            reveal_videos: false,
            other_editions: Vec::new(),
            talks_featured: Vec::new(),
            talks_panel: Vec::new(),
            talks: Vec::new(),
            tracks_ordered: Vec::new(),
            talks_start: None,
            talks_end: None,
            talks_end_offset: 0,
            hallway_start: None,
            hallway_end: None,
        }
    }

    /// All talks across the three partitions, featured and panel first.
    pub fn all_talks(&self) -> impl Iterator<Item = &Talk> {
        self.talks_featured
            .iter()
            .chain(self.talks_panel.iter())
            .chain(self.talks.iter())
    }

    /// Mutable variant of [`Event::all_talks`].
    pub fn all_talks_mut(&mut self) -> impl Iterator<Item = &mut Talk> {
        self.talks_featured
            .iter_mut()
            .chain(self.talks_panel.iter_mut())
            .chain(self.talks.iter_mut())
    }
}

// ---------------------------------------------------------------------------
// Talks
// ---------------------------------------------------------------------------

/// A talk as read from the talk source: raw string fields, nothing derived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TalkRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    /// Free-text comma-separated keywords field.
    #[serde(default)]
    pub keywords: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company2: Option<String>,
    /// Duration in minutes as an integer-coercible string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// "yes" (case-insensitive) marks a keynote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<String>,
    /// "yes" (case-insensitive) marks a panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    /// Video URL; the trailing path segment is the video identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl TalkRecord {
    /// Whether the featured flag is set ("yes", case-insensitive).
    pub fn is_featured(&self) -> bool {
        flag_is_yes(self.featured.as_deref())
    }

    /// Whether the panel flag is set ("yes", case-insensitive).
    pub fn is_panel(&self) -> bool {
        flag_is_yes(self.panel.as_deref())
    }
}

fn flag_is_yes(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("yes"))
}

/// A talk with derived fields populated by the enrichment run.
///
/// The raw record stays under its own `record` key: it shares field
/// names with the derived fields (`keywords`, `featured`, `panel`,
/// `track`), so flattening it would emit duplicate JSON keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talk {
    /// The source record the derived fields were computed from.
    pub record: TalkRecord,

    pub featured: bool,
    pub panel: bool,
    /// Track name, defaulting to [`DEFAULT_TRACK`].
    pub track: String,
    /// Duration in minutes, defaulting to [`DEFAULT_TALK_DURATION_MIN`].
    pub duration_min: u32,
    /// Absolute start time; set once by the schedule builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Minutes from the event's schedule start.
    pub offset: i64,
    /// Slug derived from the event and talk title.
    pub short_url: String,
    /// Video identifier parsed from the video URL.
    pub video_id: String,
    /// Best-available transcript, if either source had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Transcript>,
    /// Bounded, deduplicated, sorted search keywords.
    pub keywords: Vec<String>,
}

impl Talk {
    /// Derive the flag, track, and duration fields from a raw record.
    /// Featured wins over panel so the partition stays mutually exclusive.
    pub fn from_record(record: TalkRecord) -> Self {
        let featured = record.is_featured();
        let panel = !featured && record.is_panel();
        let track = record
            .track
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TRACK.to_string());
        let duration_min = record
            .duration
            .as_deref()
            .and_then(|d| d.trim().parse().ok())
            .unwrap_or(DEFAULT_TALK_DURATION_MIN);
        Self {
            record,
            featured,
            panel,
            track,
            duration_min,
            start_time: None,
            offset: 0,
            short_url: String::new(),
            video_id: String::new(),
            transcript: None,
            keywords: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transcripts
// ---------------------------------------------------------------------------

/// One timestamped subtitle cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptChunk {
    /// Cue text as ordered lines, not concatenated.
    pub text: Vec<String>,
    /// Original timestamp string (e.g., "00:00:37,644").
    pub timestamp: String,
    /// Seconds offset computed from the timestamp.
    pub timestamp_s: f64,
}

/// An ordered sequence of transcript chunks for one talk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transcript {
    pub chunks: Vec<TranscriptChunk>,
}

impl Transcript {
    pub fn new(chunks: Vec<TranscriptChunk>) -> Self {
        Self { chunks }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
