//! Playback link reformatting.
//!
//! A videoplayback link captured from the network log only covers the byte
//! range the player asked for. Dropping `range`, `rn` and `rbuf` turns it into
//! a link for the whole stream.

use url::{form_urlencoded, Url};

use crate::error::GrabError;
use crate::query::{first_values, split_query};

/// Query parameters that restrict a playback link to a snippet.
pub const RANGE_PARAMS: [&str; 3] = ["range", "rn", "rbuf"];

/// Reformats an optional link; `None` passes through untouched.
pub fn reformat_link(url: Option<&str>) -> Result<Option<String>, GrabError> {
    url.map(strip_range_params).transpose()
}

/// Removes `range`, `rn` and `rbuf` from the query of `url`.
///
/// All three must be present with a non-empty value; a missing one is a hard
/// error rather than a silent no-op, so reformatting an already reformatted
/// link fails.
///
/// Other parameters keep their first non-empty value and order of first
/// appearance, but are re-encoded (`audio/webm` comes back as `audio%2Fwebm`).
/// Only the query is rewritten: everything before `?` and after `#` is copied
/// byte for byte.
pub fn strip_range_params(url: &str) -> Result<String, GrabError> {
    Url::parse(url).map_err(|source| GrabError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let parts = split_query(url);
    let mut pairs = first_values(parts.query.unwrap_or(""));
    for param in RANGE_PARAMS {
        let idx = pairs
            .iter()
            .position(|(k, _)| k == param)
            .ok_or_else(|| GrabError::MissingRangeParameter {
                param,
                url: url.to_string(),
            })?;
        pairs.remove(idx);
    }

    let mut out = String::with_capacity(url.len());
    out.push_str(parts.prefix);
    if !pairs.is_empty() {
        out.push('?');
        let mut query = form_urlencoded::Serializer::new(out);
        query.extend_pairs(&pairs);
        out = query.finish();
    }
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    Ok(out)
}
