//! `vgrab grab [url]` – capture, download both streams, remux.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use vgrab_core::config::GrabConfig;
use vgrab_core::fetch::CurlFetcher;
use vgrab_core::pipeline::download_and_mux;
use vgrab_core::remux::FfmpegRemuxer;

use super::links::{capture_links, print_links};

pub async fn run_grab(cfg: &GrabConfig, page_url: &str, save_log: Option<&Path>) -> Result<()> {
    let links = capture_links(cfg, page_url, save_log).await?;
    print_links(&links);

    let layout = cfg.layout();
    let fetcher = CurlFetcher::new(Duration::from_secs(cfg.tools.connect_timeout_secs));
    let remuxer = FfmpegRemuxer::new(cfg.tools.ffmpeg_path.clone());

    // curl and ffmpeg block; keep them off the async worker threads.
    let output = tokio::task::spawn_blocking(move || {
        download_and_mux(&links, &layout, &fetcher, &remuxer)
    })
    .await
    .context("download task panicked")??;

    println!("Wrote {}", output.display());
    Ok(())
}
