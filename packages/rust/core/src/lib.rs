//! Enrichment core for confkit.
//!
//! This crate ties edition matching, schedule building, transcript
//! resolution, and keyword extraction into the end-to-end enrichment
//! run over an event catalog.

pub mod editions;
pub mod pipeline;
pub mod schedule;

pub use editions::{match_editions, series_slug};
pub use pipeline::{Collaborators, EnrichedContext, enrich};
pub use schedule::{DayAnchor, FixedTimeAnchor, build_schedule};
