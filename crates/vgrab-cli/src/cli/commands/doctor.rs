//! `vgrab doctor` – environment readiness check.

use anyhow::Result;
use vgrab_core::config::{self, GrabConfig};
use vgrab_core::logging;
use vgrab_core::tools::{find_chromium, resolve_program};

/// Reports where config and logs live and whether Chromium and ffmpeg resolve.
/// Fails if either tool is missing.
pub fn run_doctor(cfg: &GrabConfig) -> Result<()> {
    println!("vgrab doctor");
    println!("============");
    if let Ok(path) = config::config_path() {
        println!("Config: {}", path.display());
    }
    if let Ok(path) = logging::log_file_path() {
        println!("Log:    {}", path.display());
    }
    println!();

    let chromium = find_chromium(cfg.browser.chromium_path.as_deref());
    match &chromium {
        Some(path) => println!("[OK] Chromium: {}", path.display()),
        None => println!("[!!] Chromium not found (set browser.chromium_path or VGRAB_CHROMIUM_PATH)"),
    }

    let ffmpeg = resolve_program(&cfg.tools.ffmpeg_path);
    match &ffmpeg {
        Some(path) => println!("[OK] ffmpeg: {}", path.display()),
        None => println!(
            "[!!] ffmpeg not found: {} (set tools.ffmpeg_path)",
            cfg.tools.ffmpeg_path.display()
        ),
    }

    if chromium.is_none() || ffmpeg.is_none() {
        anyhow::bail!("required tools are missing");
    }
    println!();
    println!("Status: READY");
    Ok(())
}
