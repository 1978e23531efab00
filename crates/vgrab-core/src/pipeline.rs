//! Download/mux driver: fetch both streams, then remux them.
//!
//! Steps run strictly one after another. Nothing checks that a fetched file
//! is valid media; a truncated stream only shows up as a remux failure.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::OutputLayout;
use crate::error::StreamKind;
use crate::fetch::Fetcher;
use crate::netlog::MediaLinks;
use crate::remux::Remuxer;

/// Fetches audio to `layout.audio`, video to `layout.video`, then remuxes
/// both into `layout.output` (overwriting it). Returns the output path.
///
/// Both links must be present; an absent one fails before anything is fetched.
pub fn download_and_mux<F, R>(
    links: &MediaLinks,
    layout: &OutputLayout,
    fetcher: &F,
    remuxer: &R,
) -> Result<PathBuf>
where
    F: Fetcher + ?Sized,
    R: Remuxer + ?Sized,
{
    let audio_url = links.require(StreamKind::Audio)?;
    let video_url = links.require(StreamKind::Video)?;

    for path in [&layout.audio, &layout.video, &layout.output] {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {}", dir.display()))?;
        }
    }

    for (kind, url, dest) in [
        (StreamKind::Audio, audio_url, &layout.audio),
        (StreamKind::Video, video_url, &layout.video),
    ] {
        tracing::info!(%kind, "downloading to {}", dest.display());
        fetcher
            .fetch(url, dest)
            .with_context(|| format!("download {kind} stream"))?;
    }

    remuxer
        .remux(&layout.audio, &layout.video, &layout.output)
        .context("remux audio and video")?;
    tracing::info!("wrote {}", layout.output.display());
    Ok(layout.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrabError;
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct Calls(RefCell<Vec<String>>);

    impl Calls {
        fn push(&self, s: String) {
            self.0.borrow_mut().push(s);
        }
        fn take(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    struct FakeFetcher<'a> {
        calls: &'a Calls,
        fail_on: Option<&'static str>,
    }

    impl Fetcher for FakeFetcher<'_> {
        fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
            self.calls.push(format!("fetch {url}"));
            if self.fail_on.is_some_and(|f| url.contains(f)) {
                anyhow::bail!("HTTP 403");
            }
            fs::write(dest, url)?;
            Ok(url.len() as u64)
        }
    }

    struct FakeRemuxer<'a> {
        calls: &'a Calls,
    }

    impl Remuxer for FakeRemuxer<'_> {
        fn remux(&self, audio: &Path, video: &Path, output: &Path) -> Result<()> {
            self.calls.push("remux".to_string());
            let mut data = fs::read(audio)?;
            data.extend(fs::read(video)?);
            fs::write(output, data)?;
            Ok(())
        }
    }

    fn links() -> MediaLinks {
        MediaLinks {
            audio: Some("https://h.example/videoplayback?mime=audio".to_string()),
            video: Some("https://h.example/videoplayback?mime=video".to_string()),
        }
    }

    fn layout(dir: &Path) -> OutputLayout {
        OutputLayout {
            audio: dir.join("grab/audio.webm"),
            video: dir.join("grab/video.webm"),
            output: dir.join("grab/output.webm"),
        }
    }

    #[test]
    fn fetches_audio_then_video_then_remuxes() {
        let dir = tempfile::tempdir().unwrap();
        let layout = layout(dir.path());
        let calls = Calls::default();
        let out = download_and_mux(
            &links(),
            &layout,
            &FakeFetcher {
                calls: &calls,
                fail_on: None,
            },
            &FakeRemuxer { calls: &calls },
        )
        .unwrap();

        assert_eq!(out, layout.output);
        assert_eq!(
            calls.take(),
            vec![
                "fetch https://h.example/videoplayback?mime=audio".to_string(),
                "fetch https://h.example/videoplayback?mime=video".to_string(),
                "remux".to_string(),
            ]
        );
        assert_eq!(
            fs::read_to_string(&layout.output).unwrap(),
            "https://h.example/videoplayback?mime=audiohttps://h.example/videoplayback?mime=video"
        );
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let layout = layout(dir.path());
        fs::create_dir_all(layout.output.parent().unwrap()).unwrap();
        fs::write(&layout.output, "stale output from last run").unwrap();
        let calls = Calls::default();
        download_and_mux(
            &links(),
            &layout,
            &FakeFetcher {
                calls: &calls,
                fail_on: None,
            },
            &FakeRemuxer { calls: &calls },
        )
        .unwrap();
        assert!(!fs::read_to_string(&layout.output).unwrap().contains("stale"));
    }

    #[test]
    fn failed_fetch_stops_before_remux() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Calls::default();
        let err = download_and_mux(
            &links(),
            &layout(dir.path()),
            &FakeFetcher {
                calls: &calls,
                fail_on: Some("mime=audio"),
            },
            &FakeRemuxer { calls: &calls },
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("download audio stream"));
        assert_eq!(calls.take().len(), 1);
    }

    #[test]
    fn absent_link_fails_before_fetching() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Calls::default();
        let links = MediaLinks {
            audio: links().audio,
            video: None,
        };
        let err = download_and_mux(
            &links,
            &layout(dir.path()),
            &FakeFetcher {
                calls: &calls,
                fail_on: None,
            },
            &FakeRemuxer { calls: &calls },
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GrabError>(),
            Some(GrabError::MissingStream(StreamKind::Video))
        ));
        assert!(calls.take().is_empty());
    }
}
