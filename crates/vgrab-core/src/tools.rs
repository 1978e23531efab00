//! Locating the external programs a run depends on.

use std::path::{Path, PathBuf};

/// Executable names tried on PATH when no chromium path is configured.
const CHROMIUM_NAMES: [&str; 4] = [
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
];

/// Resolves the browser executable: `VGRAB_CHROMIUM_PATH`, then the configured
/// path, then well-known names on PATH.
pub fn find_chromium(configured: Option<&Path>) -> Option<PathBuf> {
    if let Ok(p) = std::env::var("VGRAB_CHROMIUM_PATH") {
        let path = PathBuf::from(p);
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(path) = configured {
        return resolve_program(path);
    }

    CHROMIUM_NAMES
        .iter()
        .find_map(|name| which::which(name).ok())
}

/// Resolves `program` to an executable path. Bare names are looked up on
/// PATH; anything with a directory component must exist as given.
pub fn resolve_program(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 {
        return program.exists().then(|| program.to_path_buf());
    }
    which::which(program).ok()
}
