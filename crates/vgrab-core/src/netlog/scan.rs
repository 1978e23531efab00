//! Picks the audio and video playback links out of a network log.

use crate::error::{GrabError, StreamKind};
use crate::query::first_value;

use super::entry::LogEntry;

/// Substring that marks a media stream request.
pub const PLAYBACK_MARKER: &str = "videoplayback";

/// The pair of stream links found in (or derived from) a network log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaLinks {
    pub audio: Option<String>,
    pub video: Option<String>,
}

impl MediaLinks {
    /// True once both streams have a link.
    pub fn is_complete(&self) -> bool {
        self.audio.is_some() && self.video.is_some()
    }

    pub fn get(&self, kind: StreamKind) -> Option<&str> {
        match kind {
            StreamKind::Audio => self.audio.as_deref(),
            StreamKind::Video => self.video.as_deref(),
        }
    }

    /// The link for `kind`, or `MissingStream` if the scan found none.
    pub fn require(&self, kind: StreamKind) -> Result<&str, GrabError> {
        self.get(kind).ok_or(GrabError::MissingStream(kind))
    }
}

/// Scans entries in log order and returns the first audio and the first video
/// playback link.
///
/// Entries without a request URL, and URLs without [`PLAYBACK_MARKER`], are
/// skipped. A playback URL without a non-empty `mime` parameter aborts the
/// scan with `MissingMimeParameter`. The scan stops as soon as both links are
/// known.
///
/// This assumes the first playback requests belong to the real video and not
/// to an advertisement; nothing here checks that.
pub fn scan_media_links<'a, I>(entries: I) -> Result<MediaLinks, GrabError>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut links = MediaLinks::default();

    for (index, entry) in entries.into_iter().enumerate() {
        let Some(url) = entry.request_url() else {
            tracing::trace!(index, "log entry has no request url; skipping");
            continue;
        };
        if !url.contains(PLAYBACK_MARKER) {
            continue;
        }

        let mime = first_value(url, "mime").ok_or_else(|| GrabError::MissingMimeParameter {
            url: url.to_string(),
        })?;

        if mime.contains("audio") && links.audio.is_none() {
            tracing::debug!(index, %mime, "audio playback link found");
            links.audio = Some(url.to_string());
        } else if mime.contains("video") && links.video.is_none() {
            tracing::debug!(index, %mime, "video playback link found");
            links.video = Some(url.to_string());
        } else {
            tracing::trace!(index, %mime, "playback link ignored");
        }

        if links.is_complete() {
            break;
        }
    }

    Ok(links)
}

/// Every playback URL in the log, in order. Used to inspect captures by hand
/// (e.g. to check whether ad streams came first).
pub fn videoplayback_urls<'a, I>(entries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    entries
        .into_iter()
        .filter_map(LogEntry::request_url)
        .filter(|url| url.contains(PLAYBACK_MARKER))
        .collect()
}
