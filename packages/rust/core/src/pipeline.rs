//! End-to-end enrichment: catalog → sorted, partitioned, fully derived
//! event model ready for rendering.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::{info, instrument, warn};
use url::Url;

use confkit_keywords::KeywordExtractor;
use confkit_shared::{Catalog, Event, Talk};
use confkit_sources::{TalkSource, resolve_thumbnail};
use confkit_transcript::{ChunkSource, SubtitleSource, resolve_transcript};

use crate::editions::match_editions;
use crate::schedule::{DayAnchor, build_schedule};

/// Sponsor tiers whose sponsors are featured site-wide.
const FEATURED_TIERS: [&str; 2] = ["platinum", "diamond"];

/// Days past an event's date during which it still counts as upcoming.
const CFP_GRACE_DAYS: i64 = 2;

/// The external collaborators the enrichment run reads from.
pub struct Collaborators<'a> {
    /// Ordered talk records per event.
    pub talks: &'a dyn TalkSource,
    /// Structured transcripts by video identifier.
    pub chunks: &'a dyn ChunkSource,
    /// Raw subtitles by speaker and event identifier.
    pub subtitles: &'a dyn SubtitleSource,
    /// Canonical start-of-day instant per event date.
    pub anchor: &'a dyn DayAnchor,
    /// Keyword extractor with its injected stoplist.
    pub extractor: &'a KeywordExtractor,
    /// Root directory for thumbnail resolution.
    pub assets_dir: &'a Path,
}

/// The fully-resolved model the enrichment run produces. Event lists
/// other than `events` hold indices into `events`.
#[derive(Debug, Serialize)]
pub struct EnrichedContext {
    /// Public URL prefix from the catalog.
    pub base_path: String,
    /// All events, enriched, sorted ascending by date.
    pub events: Vec<Event>,
    /// Events bucketed by year.
    pub years: BTreeMap<String, Vec<usize>>,
    /// Years with at least one event, newest first.
    pub years_sorted: Vec<String>,
    /// Events still ahead, ascending by date.
    pub future_events: Vec<usize>,
    /// The most recent past event.
    pub current_event: Option<usize>,
    /// Past events other than the current one, newest first.
    pub past_events: Vec<usize>,
    /// Sponsors from the featured tiers across all events, sorted.
    pub featured_sponsors: Vec<String>,
    /// All panel talks across all events, enriched.
    pub panels: Vec<Talk>,
}

/// Run the full enrichment over a catalog.
///
/// `today` is passed in rather than read from the clock so the
/// date-relative fields (`cfp_closed`, `reveal_videos`, the
/// past/future partition) are reproducible.
#[instrument(skip_all, fields(event_count = catalog.events.len(), %today))]
pub fn enrich(catalog: Catalog, deps: &Collaborators<'_>, today: NaiveDate) -> EnrichedContext {
    let base_path = catalog.base_path;

    let mut events: Vec<Event> = catalog.events.into_iter().map(Event::from_record).collect();
    events.sort_by_key(|e| e.date);

    // --- Date-relative flags, sponsor aggregation, year buckets ---
    let cfp_cutoff = today + Duration::days(CFP_GRACE_DAYS);
    let mut featured_sponsors: BTreeSet<String> = BTreeSet::new();
    let mut years: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut past: Vec<usize> = Vec::new();
    let mut future_events: Vec<usize> = Vec::new();

    for (i, event) in events.iter_mut().enumerate() {
        for tier in &mut event.sponsors {
            tier.names.sort();
            if FEATURED_TIERS.contains(&tier.tier.as_str()) {
                featured_sponsors.extend(tier.names.iter().cloned());
            }
        }

        if event.date <= cfp_cutoff {
            event.cfp_closed = true;
            past.push(i);
        } else {
            future_events.push(i);
        }

        event.reveal_videos = event.videos_reveal_date.is_some_and(|d| today >= d);
        years.entry(event.year.clone()).or_default().push(i);
    }

    let current_event = past.last().copied();
    let mut past_events: Vec<usize> = past;
    past_events.pop();
    past_events.reverse();

    let years_sorted: Vec<String> = years.keys().rev().cloned().collect();

    // --- Cross-year linkage ---
    match_editions(&mut events);

    // --- Per-event talk enrichment ---
    let mut panels: Vec<Talk> = Vec::new();
    for event in &mut events {
        enrich_event(event, &base_path, deps);
        panels.extend(event.talks_panel.iter().cloned());
    }

    EnrichedContext {
        base_path,
        events,
        years,
        years_sorted,
        future_events,
        current_event,
        past_events,
        featured_sponsors: featured_sponsors.into_iter().collect(),
        panels,
    }
}

/// Load, partition, schedule, and enrich one event's talks in place.
fn enrich_event(event: &mut Event, base_path: &str, deps: &Collaborators<'_>) {
    // Externally-hosted events only get their URL; no talks of our own.
    if let Some(external) = &event.external_url {
        event.url = external.clone();
        return;
    }

    let Some(short_url) = event.short_url.clone() else {
        warn!(name = %event.name, "event has neither short_url nor external_url");
        return;
    };
    event.url = format!("{base_path}{short_url}");

    if let Some(candidate) = event.thumbnail_path.take() {
        event.thumbnail_path = Some(resolve_thumbnail(deps.assets_dir, &candidate));
    }

    // A failed talk-source read degrades this event to an empty talk
    // list; the rest of the run is unaffected.
    let records = match &event.talks_path {
        Some(talks_path) => match deps.talks.talks_for(talks_path) {
            Ok(records) => records,
            Err(e) => {
                warn!(event = %short_url, error = %e, "talk source unavailable, continuing with no talks");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    // Partition: featured wins over panel, the rest go by track.
    for record in records {
        let talk = Talk::from_record(record);
        if talk.featured {
            event.talks_featured.push(talk);
        } else if talk.panel {
            event.talks_panel.push(talk);
        } else {
            event.talks.push(talk);
        }
    }

    // Unique track names in order of first appearance.
    for talk in &event.talks {
        if !event.tracks_ordered.contains(&talk.track) {
            event.tracks_ordered.push(talk.track.clone());
        }
    }

    info!(
        date = %event.date,
        name = %event.name,
        short_url = %short_url,
        talks = event.talks.len(),
        keynotes = event.talks_featured.len(),
        panels = event.talks_panel.len(),
        "loaded event talks"
    );

    build_schedule(event, deps.anchor.anchor(event.date));

    for talk in event.all_talks_mut() {
        talk.short_url = talk_slug(&short_url, &talk.record.title);
        talk.video_id = video_id(talk.record.video_url.as_deref());
        talk.transcript = resolve_transcript(
            deps.chunks,
            deps.subtitles,
            &talk.video_id,
            talk.record.name1.as_deref().unwrap_or_default(),
            &short_url,
        );
        talk.keywords = deps.extractor.extract(&talk.record);
    }
}

/// Slug for a talk page: event identifier plus the dashed talk title.
fn talk_slug(event_short_url: &str, title: &str) -> String {
    let title_slug = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if title_slug.is_empty() {
        event_short_url.to_string()
    } else {
        format!("{event_short_url}-{title_slug}")
    }
}

/// Video identifier: the trailing path segment of the video URL.
fn video_id(video_url: Option<&str>) -> String {
    let Some(raw) = video_url else {
        return String::new();
    };
    if let Ok(parsed) = Url::parse(raw) {
        if let Some(segment) = parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        {
            return segment.to_string();
        }
    }
    // Not an absolute URL: fall back to whatever trails the last slash.
    raw.rsplit('/').next().unwrap_or_default().to_string()
}
