//! `vgrab scan <path>` – inspect a saved network log.

use anyhow::Result;
use std::path::Path;
use vgrab_core::acquire::resolve_links;
use vgrab_core::netlog::{load_log_entries, videoplayback_urls};

use super::links::print_links;

/// Prints every playback request in order (to spot ad streams ahead of the
/// real ones), then the pair a grab would use.
pub fn run_scan(path: &Path) -> Result<()> {
    let entries = load_log_entries(path)?;
    let playback = videoplayback_urls(&entries);
    println!(
        "{} entries, {} playback requests",
        entries.len(),
        playback.len()
    );
    for (i, url) in playback.iter().enumerate() {
        println!("  [{i}] {url}");
    }
    println!();

    let links = resolve_links(&entries)?;
    print_links(&links);
    Ok(())
}
