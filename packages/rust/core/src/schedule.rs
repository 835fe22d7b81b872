//! Talk timeline computation.
//!
//! Tracks run in parallel: every track starts a fresh cursor at the day
//! anchor plus the premiere block, lays out the shared featured and
//! panel talks first, then its own talks. Featured and panel talks are
//! deliberately re-placed per track at the same wall-clock slot.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use confkit_shared::{Event, Talk};

/// Supplies the canonical start-of-day instant used as the schedule
/// anchor for a given event date.
pub trait DayAnchor {
    fn anchor(&self, date: NaiveDate) -> DateTime<Utc>;
}

/// Anchors every event at a fixed UTC time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeAnchor {
    pub hour: u32,
    pub minute: u32,
}

impl FixedTimeAnchor {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl DayAnchor for FixedTimeAnchor {
    fn anchor(&self, date: NaiveDate) -> DateTime<Utc> {
        let time = NaiveTime::from_hms_opt(self.hour.min(23), self.minute.min(59), 0)
            .unwrap_or_default();
        Utc.from_utc_datetime(&date.and_time(time))
    }
}

/// Compute start time, offset, and the event's overall span for every
/// talk in the event. The event's talk partition and `tracks_ordered`
/// must already be populated.
pub fn build_schedule(event: &mut Event, anchor: DateTime<Utc>) {
    let start = anchor;
    let mut end = start;
    let premiere = Duration::minutes(i64::from(event.premiere_duration));

    let tracks = event.tracks_ordered.clone();
    if tracks.is_empty() {
        // No track talks: lay out the shared block once so featured and
        // panel talks still get their single start time.
        let cursor = layout_shared(event, start, start + premiere);
        if cursor > end {
            end = cursor;
        }
    }

    for track in &tracks {
        let mut cursor = layout_shared(event, start, start + premiere);
        for talk in event.talks.iter_mut().filter(|t| &t.track == track) {
            cursor = place(talk, start, cursor);
        }
        if cursor > end {
            end = cursor;
        }
    }

    event.talks_start = Some(start);
    event.talks_end = Some(end);
    event.talks_end_offset = (end - start).num_minutes();
    event.hallway_start = Some(start - Duration::hours(1));
    event.hallway_end = Some(start);
}

/// Lay out the featured and panel talks shared by every track.
fn layout_shared(event: &mut Event, start: DateTime<Utc>, mut cursor: DateTime<Utc>) -> DateTime<Utc> {
    for talk in event
        .talks_featured
        .iter_mut()
        .chain(event.talks_panel.iter_mut())
    {
        cursor = place(talk, start, cursor);
    }
    cursor
}

/// Place one talk at the cursor and advance by its duration.
fn place(talk: &mut Talk, start: DateTime<Utc>, cursor: DateTime<Utc>) -> DateTime<Utc> {
    talk.start_time = Some(cursor);
    talk.offset = (cursor - start).num_minutes();
    cursor + Duration::minutes(i64::from(talk.duration_min))
}
