//! File-backed external collaborators for the enrichment core.
//!
//! Everything here is file-format glue with a narrow interface: the
//! catalog loader, the talk source, the two transcript sources, the
//! stoplist loader, and the thumbnail resolver. None of it contains
//! enrichment logic.

pub mod catalog;
pub mod stoplist;
pub mod talks;
pub mod thumbs;
pub mod transcripts;

pub use catalog::load_catalog;
pub use stoplist::load_stoplist;
pub use talks::{JsonTalkSource, TalkSource};
pub use thumbs::resolve_thumbnail;
pub use transcripts::{FileChunkSource, FileSubtitleSource};
