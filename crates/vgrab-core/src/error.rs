//! Fatal conditions raised by the scanner, reformatter and pipeline.
//!
//! Missing nested fields in a log entry are not errors (the entry is skipped);
//! only the lookups that must succeed get a variant here. Collaborator
//! failures (browser, curl, ffmpeg) travel as `anyhow::Error` with context.

use std::fmt;

/// Which of the two media streams a link or file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Audio,
    Video,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Audio => f.write_str("audio"),
            StreamKind::Video => f.write_str("video"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GrabError {
    /// A videoplayback URL carried no `mime` query parameter.
    #[error("videoplayback URL has no mime parameter: {url}")]
    MissingMimeParameter { url: String },

    /// One of `range`, `rn`, `rbuf` was absent when reformatting.
    #[error("playback URL has no `{param}` parameter to remove: {url}")]
    MissingRangeParameter { param: &'static str, url: String },

    /// The reformatter could not parse the link as an absolute URL.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The scan finished without a link for this stream.
    #[error("no {0} stream found in network log")]
    MissingStream(StreamKind),
}
