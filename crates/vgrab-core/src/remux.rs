//! Remux collaborator: combine the audio and video files into one container
//! without re-encoding.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Number of trailing stderr lines kept in a remux failure message.
const STDERR_TAIL_LINES: usize = 8;

/// Stream-copies `audio` and `video` into `output`, overwriting it.
pub trait Remuxer {
    fn remux(&self, audio: &Path, video: &Path, output: &Path) -> Result<()>;
}

/// [`Remuxer`] that shells out to ffmpeg.
#[derive(Debug, Clone)]
pub struct FfmpegRemuxer {
    program: PathBuf,
}

impl FfmpegRemuxer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for FfmpegRemuxer {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

/// `-i <audio> -i <video> -c copy -y <output>`
pub fn ffmpeg_args(audio: &Path, video: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-i".into(),
        audio.into(),
        "-i".into(),
        video.into(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        output.into(),
    ]
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

impl Remuxer for FfmpegRemuxer {
    /// Blocks until ffmpeg exits.
    fn remux(&self, audio: &Path, video: &Path, output: &Path) -> Result<()> {
        tracing::info!(
            program = %self.program.display(),
            "remuxing {} + {} -> {}",
            audio.display(),
            video.display(),
            output.display()
        );
        let out = Command::new(&self.program)
            .args(ffmpeg_args(audio, video, output))
            .output()
            .with_context(|| format!("failed to run {}", self.program.display()))?;

        if !out.status.success() {
            anyhow::bail!(
                "{} exited with {}:\n{}",
                self.program.display(),
                out.status,
                stderr_tail(&out.stderr)
            );
        }
        Ok(())
    }
}
