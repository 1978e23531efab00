//! Network log capture through a Chromium instance (chromiumoxide).

use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig as LaunchConfig};
use chromiumoxide::cdp::browser_protocol::network::{EnableParams, EventRequestWillBeSent};
use chromiumoxide::Page;
use futures::{FutureExt, StreamExt};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

use super::NetworkLogSource;
use crate::config::BrowserConfig;
use crate::netlog::LogEntry;
use crate::tools::find_chromium;

/// DevTools event recorded for every outgoing request.
const REQUEST_EVENT: &str = "Network.requestWillBeSent";

/// Launches Chromium for each capture, loads the page once, and records a
/// `Network.requestWillBeSent` entry per request until the settle delay ends.
#[derive(Debug, Clone)]
pub struct ChromiumSource {
    executable: PathBuf,
    headless: bool,
    settle: Duration,
}

impl ChromiumSource {
    pub fn new(executable: PathBuf, headless: bool, settle: Duration) -> Self {
        Self {
            executable,
            headless,
            settle,
        }
    }

    /// Builds a source from the `[browser]` config section, locating the
    /// executable on PATH when none is configured.
    pub fn from_config(cfg: &BrowserConfig) -> Result<Self> {
        let executable = find_chromium(cfg.chromium_path.as_deref())
            .context("Chromium not found; set browser.chromium_path or VGRAB_CHROMIUM_PATH")?;
        Ok(Self::new(
            executable,
            cfg.headless,
            Duration::from_secs(cfg.settle_secs),
        ))
    }

    fn launch_config(&self) -> Result<LaunchConfig> {
        let mut builder = LaunchConfig::builder()
            .chrome_executable(&self.executable)
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--autoplay-policy=no-user-gesture-required");
        if !self.headless {
            builder = builder.with_head();
        }
        builder
            .build()
            .map_err(|e| anyhow::anyhow!("invalid browser config: {e}"))
    }
}

/// Shapes a request event like a DevTools performance log record, so the
/// scanner reads live captures and saved logs the same way.
fn request_entry(event: &EventRequestWillBeSent) -> LogEntry {
    LogEntry::new(json!({
        "message": {
            "method": REQUEST_EVENT,
            "params": {
                "request": {
                    "url": event.request.url,
                    "method": event.request.method,
                }
            }
        }
    }))
}

/// Enables network events on `page`, loads `page_url` and returns every
/// request seen until `settle` has passed after the load event.
async fn record_requests(page: &Page, page_url: &str, settle: Duration) -> Result<Vec<LogEntry>> {
    page.execute(EnableParams::default())
        .await
        .context("failed to enable network events")?;
    let mut requests = page
        .event_listener::<EventRequestWillBeSent>()
        .await
        .context("failed to subscribe to network events")?;

    page.goto(page_url)
        .await
        .with_context(|| format!("failed to navigate to {page_url}"))?;
    tokio::time::sleep(settle).await;

    // Everything recorded so far is already buffered in the stream.
    let mut entries = Vec::new();
    while let Some(Some(event)) = requests.next().now_or_never() {
        entries.push(request_entry(&event));
    }
    Ok(entries)
}

#[async_trait]
impl NetworkLogSource for ChromiumSource {
    async fn capture(&self, page_url: &str) -> Result<Vec<LogEntry>> {
        tracing::info!(
            page_url,
            executable = %self.executable.display(),
            headless = self.headless,
            "launching browser"
        );
        let (mut browser, mut handler) = Browser::launch(self.launch_config()?)
            .await
            .context("failed to launch Chromium")?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::trace!("browser handler: {e}");
                }
            }
        });

        // Page work runs in its own block so the browser is shut down on
        // every path out of it.
        let result: Result<Vec<LogEntry>> = async {
            let page = browser
                .new_page("about:blank")
                .await
                .context("failed to open browser page")?;
            let entries = record_requests(&page, page_url, self.settle).await;
            if let Err(e) = page.close().await {
                tracing::warn!("failed to close page: {e}");
            }
            entries
        }
        .await;

        if let Err(e) = browser.close().await {
            tracing::warn!("failed to close browser: {e}");
        }
        match browser.wait().await {
            Ok(status) => tracing::trace!(?status, "browser exited"),
            Err(e) => tracing::trace!("waiting for browser exit: {e}"),
        }
        handler_task.abort();

        let entries = result?;
        tracing::info!(count = entries.len(), "captured network requests");
        Ok(entries)
    }
}
