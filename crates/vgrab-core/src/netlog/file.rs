//! Saved network logs: one JSON record per line.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::entry::LogEntry;

/// Reads a JSON Lines log. Blank lines are ignored; each other line is either
/// a bare record or a WebDriver envelope (see [`LogEntry::from_value`]).
pub fn load_log_entries(path: &Path) -> Result<Vec<LogEntry>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read network log: {}", path.display()))?;

    let mut entries = Vec::new();
    for (lineno, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry = LogEntry::from_json_str(line)
            .with_context(|| format!("parse log entry at {}:{}", path.display(), lineno + 1))?;
        entries.push(entry);
    }
    tracing::debug!(count = entries.len(), "loaded network log from {}", path.display());
    Ok(entries)
}

/// Writes entries as JSON Lines, replacing any existing file.
pub fn save_log_entries(path: &Path, entries: &[LogEntry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let file = fs::File::create(path)
        .with_context(|| format!("create network log: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for entry in entries {
        serde_json::to_writer(&mut out, entry)?;
        out.write_all(b"\n")?;
    }
    out.flush()
        .with_context(|| format!("write network log: {}", path.display()))?;
    tracing::info!(count = entries.len(), "saved network log to {}", path.display());
    Ok(())
}
