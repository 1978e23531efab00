//! Browser network log: entries, the playback link scanner, and saved logs.
//!
//! Entries come from the browser capture (see `capture`) or from a JSON Lines
//! file written by an earlier run. The scanner only reads
//! `message.params.request.url`; every other field is carried through as is.

mod entry;
mod file;
mod scan;

pub use entry::LogEntry;
pub use file::{load_log_entries, save_log_entries};
pub use scan::{scan_media_links, videoplayback_urls, MediaLinks, PLAYBACK_MARKER};
