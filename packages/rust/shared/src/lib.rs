//! Shared types, error model, and configuration for confkit.
//!
//! This crate is the foundation depended on by all other confkit crates.
//! It provides:
//! - [`ConfkitError`] — the unified error type
//! - Domain types ([`Catalog`], [`Event`], [`Talk`], [`Transcript`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, KeywordsConfig, PathsConfig, ScheduleConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{ConfkitError, Result};
pub use types::{
    Catalog, DEFAULT_TALK_DURATION_MIN, DEFAULT_TRACK, EditionRef, Event, EventRecord,
    SponsorTier, Talk, TalkRecord, Transcript, TranscriptChunk,
};
