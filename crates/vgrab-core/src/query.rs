//! Query-string helpers shared by the scanner and the reformatter.
//!
//! Lookups never fail on odd input: a URL without `?` has an empty query.
//! A parameter with an empty value (`mime=`, or a bare `mime`) counts as
//! absent everywhere.

use std::borrow::Cow;
use url::form_urlencoded;

/// A URL cut around its query: `prefix ? query # fragment`.
///
/// `prefix` runs up to the first `?` before any `#`; `query` and `fragment`
/// exclude their delimiters and are `None` when the delimiter is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySplit<'a> {
    pub prefix: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

pub fn split_query(url: &str) -> QuerySplit<'_> {
    let (head, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let (prefix, query) = match head.split_once('?') {
        Some((prefix, query)) => (prefix, Some(query)),
        None => (head, None),
    };
    QuerySplit {
        prefix,
        query,
        fragment,
    }
}

/// Raw query component of `url`: the text after the first `?` up to any `#`.
pub fn query_string(url: &str) -> &str {
    split_query(url).query.unwrap_or("")
}

fn non_blank_pairs(query: &str) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
    form_urlencoded::parse(query.as_bytes()).filter(|(_, v)| !v.is_empty())
}

/// Decodes a query into key/value pairs, keeping only the first non-empty
/// value per key in order of first appearance.
pub fn first_values(query: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in non_blank_pairs(query) {
        if !pairs.iter().any(|(seen, _)| *seen == k) {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    pairs
}

/// First non-empty decoded value of query parameter `name` in `url`.
pub fn first_value(url: &str, name: &str) -> Option<String> {
    non_blank_pairs(query_string(url))
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_ignores_fragment() {
        assert_eq!(query_string("https://h/p?a=1&b=2#frag"), "a=1&b=2");
        assert_eq!(query_string("https://h/p#x?y=1"), "");
        assert_eq!(query_string("https://h/p"), "");
    }

    #[test]
    fn first_value_decodes_percent_escapes() {
        let url = "https://h/videoplayback?mime=audio%2Fwebm&mime=video%2Fwebm";
        assert_eq!(first_value(url, "mime").as_deref(), Some("audio/webm"));
        assert_eq!(first_value(url, "range"), None);
    }

    #[test]
    fn first_values_keeps_first_occurrence_order() {
        let pairs = first_values("b=1&a=2&b=3&c=4");
        assert_eq!(
            pairs,
            vec![
                ("b".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string()),
                ("c".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn blank_values_count_as_absent() {
        assert_eq!(
            first_values("c=&a=1&d&c=2"),
            vec![
                ("a".to_string(), "1".to_string()),
                ("c".to_string(), "2".to_string()),
            ]
        );
        assert_eq!(first_value("https://h/videoplayback?mime=&itag=1", "mime"), None);
        assert_eq!(first_value("https://h/videoplayback?mime", "mime"), None);
        assert_eq!(
            first_value("https://h/videoplayback?mime=&mime=audio", "mime").as_deref(),
            Some("audio")
        );
    }

    #[test]
    fn split_query_keeps_every_part_verbatim() {
        assert_eq!(
            split_query("HTTPS://H.Example:443/a/./b?x=1#F%7e x?y"),
            QuerySplit {
                prefix: "HTTPS://H.Example:443/a/./b",
                query: Some("x=1"),
                fragment: Some("F%7e x?y"),
            }
        );
        assert_eq!(
            split_query("https://h/p"),
            QuerySplit {
                prefix: "https://h/p",
                query: None,
                fragment: None,
            }
        );
    }
}
