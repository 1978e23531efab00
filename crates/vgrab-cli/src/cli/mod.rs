//! CLI for vgrab.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vgrab_core::config;

use commands::{run_completions, run_doctor, run_grab, run_links, run_scan};

/// Top-level CLI for vgrab.
#[derive(Debug, Parser)]
#[command(name = "vgrab")]
#[command(
    about = "vgrab: pull the audio and video streams of a watch page and remux them",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Capture the page, download both streams and remux them into one file.
    Grab {
        /// Watch page URL (defaults to `target_url` from config.toml).
        url: Option<String>,

        /// Directory for audio.webm, video.webm and output.webm.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Also write the captured network log here as JSON Lines.
        #[arg(long, value_name = "FILE")]
        save_log: Option<PathBuf>,
    },

    /// Capture the page and print the reformatted audio and video links.
    Links {
        /// Watch page URL (defaults to `target_url` from config.toml).
        url: Option<String>,

        /// Also write the captured network log here as JSON Lines.
        #[arg(long, value_name = "FILE")]
        save_log: Option<PathBuf>,
    },

    /// List the playback requests in a saved network log and resolve the pair.
    Scan {
        /// JSON Lines log written by `--save-log`.
        path: PathBuf,
    },

    /// Check that Chromium and ffmpeg can be found.
    Doctor,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell, &mut Cli::command());
            return Ok(());
        }

        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Grab {
                url,
                output_dir,
                save_log,
            } => {
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                let page_url = url.unwrap_or_else(|| cfg.target_url.clone());
                run_grab(&cfg, &page_url, save_log.as_deref()).await?;
            }
            CliCommand::Links { url, save_log } => {
                let page_url = url.unwrap_or_else(|| cfg.target_url.clone());
                run_links(&cfg, &page_url, save_log.as_deref()).await?;
            }
            CliCommand::Scan { path } => run_scan(&path)?,
            CliCommand::Doctor => run_doctor(&cfg)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}
