use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Page used when no URL is given on the command line or in the config file.
pub const DEFAULT_TARGET_URL: &str = "https://www.youtube.com/watch?v=uAPUkgeiFVY";

/// Browser capture settings (optional `[browser]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Chromium/Chrome executable. When unset, well-known names are looked up on PATH.
    pub chromium_path: Option<PathBuf>,
    /// Run without a visible window.
    pub headless: bool,
    /// Seconds to keep recording requests after the page has loaded, so the
    /// player has time to start fetching its streams.
    pub settle_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            chromium_path: None,
            headless: true,
            settle_secs: 5,
        }
    }
}

/// External tool settings (optional `[tools]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// ffmpeg executable used for remuxing.
    pub ffmpeg_path: PathBuf,
    /// Connect timeout for stream downloads.
    pub connect_timeout_secs: u64,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            connect_timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/vgrab/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabConfig {
    /// Page whose network traffic is captured.
    pub target_url: String,
    /// Directory receiving the downloaded streams and the muxed output.
    pub output_dir: PathBuf,
    pub audio_file_name: String,
    pub video_file_name: String,
    pub output_file_name: String,
    pub browser: BrowserConfig,
    pub tools: ToolsConfig,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            output_dir: PathBuf::from("youtubeFiles"),
            audio_file_name: "audio.webm".to_string(),
            video_file_name: "video.webm".to_string(),
            output_file_name: "output.webm".to_string(),
            browser: BrowserConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl GrabConfig {
    /// Where the audio stream, video stream and muxed result go.
    pub fn layout(&self) -> OutputLayout {
        OutputLayout {
            audio: self.output_dir.join(&self.audio_file_name),
            video: self.output_dir.join(&self.video_file_name),
            output: self.output_dir.join(&self.output_file_name),
        }
    }
}

/// Resolved file paths for one run. Every run overwrites the same three files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub audio: PathBuf,
    pub video: PathBuf,
    pub output: PathBuf,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
