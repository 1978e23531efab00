//! Page URL → full-length audio and video links.

use anyhow::{Context, Result};

use crate::capture::NetworkLogSource;
use crate::netlog::{scan_media_links, LogEntry, MediaLinks};
use crate::reformat::reformat_link;

/// Loads `page_url` once through `source`, picks the first audio and video
/// playback links from the log and strips their range parameters.
///
/// Either link may be `None` if the capture contained no such stream.
pub async fn acquire_media_links<S>(source: &S, page_url: &str) -> Result<MediaLinks>
where
    S: NetworkLogSource + Sync + ?Sized,
{
    let entries = source
        .capture(page_url)
        .await
        .with_context(|| format!("capture network log for {page_url}"))?;
    resolve_links(&entries)
}

/// Scans `entries` and reformats whatever was found. Both reformat steps run
/// independently; a missing stream stays `None`.
///
/// Exposed separately so a caller can save the raw capture before scanning.
pub fn resolve_links(entries: &[LogEntry]) -> Result<MediaLinks> {
    let raw = scan_media_links(entries)?;
    tracing::debug!(
        audio = raw.audio.is_some(),
        video = raw.video.is_some(),
        scanned = entries.len(),
        "scan finished"
    );
    Ok(MediaLinks {
        audio: reformat_link(raw.audio.as_deref()).context("reformat audio link")?,
        video: reformat_link(raw.video.as_deref()).context("reformat video link")?,
    })
}
