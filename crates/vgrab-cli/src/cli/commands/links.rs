//! `vgrab links [url]` – print the full-length audio and video links.

use anyhow::{Context, Result};
use std::path::Path;
use vgrab_core::acquire::{acquire_media_links, resolve_links};
use vgrab_core::capture::{ChromiumSource, NetworkLogSource};
use vgrab_core::config::GrabConfig;
use vgrab_core::netlog::save_log_entries;
use vgrab_core::{MediaLinks, StreamKind};

pub async fn run_links(cfg: &GrabConfig, page_url: &str, save_log: Option<&Path>) -> Result<()> {
    let links = capture_links(cfg, page_url, save_log).await?;
    print_links(&links);
    Ok(())
}

/// Loads `page_url` in Chromium and resolves the reformatted links. With
/// `save_log`, the raw capture is written before scanning so it survives a
/// scan failure.
pub(super) async fn capture_links(
    cfg: &GrabConfig,
    page_url: &str,
    save_log: Option<&Path>,
) -> Result<MediaLinks> {
    let source = ChromiumSource::from_config(&cfg.browser)?;
    let Some(log_path) = save_log else {
        return acquire_media_links(&source, page_url).await;
    };

    let entries = source
        .capture(page_url)
        .await
        .with_context(|| format!("capture network log for {page_url}"))?;
    save_log_entries(log_path, &entries)?;
    println!("Saved {} log entries to {}", entries.len(), log_path.display());
    resolve_links(&entries)
}

pub(super) fn print_links(links: &MediaLinks) {
    for kind in [StreamKind::Audio, StreamKind::Video] {
        println!("{kind}: {}", links.get(kind).unwrap_or("(not found)"));
    }
}
