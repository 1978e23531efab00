//! Download collaborator: fetch one URL into one file.
//!
//! Uses the curl crate (libcurl). A single plain GET per stream: the links
//! handed in have already had their range parameters removed, so the server
//! sends the whole stream in one response.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Fetches `url` into `dest`, replacing any existing file. Returns bytes written.
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// libcurl-backed [`Fetcher`].
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    connect_timeout: Duration,
}

impl CurlFetcher {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl Fetcher for CurlFetcher {
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    ///
    /// The destination is truncated up front and not removed on failure.
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        let file = fs::File::create(dest)
            .with_context(|| format!("create {}", dest.display()))?;
        let mut out = BufWriter::new(file);
        let mut written: u64 = 0;
        let mut write_err: Option<std::io::Error> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.low_speed_limit(1024)?;
        easy.low_speed_time(Duration::from_secs(60))?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match out.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };
        if let Some(e) = write_err {
            return Err(e).with_context(|| format!("write {}", dest.display()));
        }
        performed.with_context(|| format!("GET {url} failed"))?;

        let code = easy.response_code().context("no response code")?;
        if !(200..300).contains(&code) {
            anyhow::bail!("GET {} returned HTTP {}", url, code);
        }

        out.flush()
            .with_context(|| format!("write {}", dest.display()))?;
        tracing::info!(bytes = written, "fetched {}", dest.display());
        Ok(written)
    }
}
