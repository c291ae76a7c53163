//! Validated input types. Both are checked once at construction and
//! immutable afterwards, so the rest of the pipeline never re-validates.

use url::Url;

use crate::error::{Error, Result};

/// A validated watch-page URL.
///
/// Only the canonical `http(s)://[www.]youtube.com/watch?v=...` shape is
/// accepted. Short links (`youtu.be/...`), embeds and mobile hosts are
/// rejected even though they reference the same video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUrl(String);

const ALLOWED_HOSTS: [&str; 2] = ["www.youtube.com", "youtube.com"];

impl VideoUrl {
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|_| Error::InvalidUrl(input.to_string()))?;

        let scheme_ok = url.scheme() == "http" || url.scheme() == "https";
        let host_ok = url
            .host_str()
            .map(|h| ALLOWED_HOSTS.contains(&h))
            .unwrap_or(false);
        let path_ok = url.path() == "/watch";
        let has_video_id = url
            .query_pairs()
            .any(|(k, v)| k == "v" && !v.is_empty());

        if scheme_ok && host_ok && path_ok && has_video_id {
            Ok(VideoUrl(input.to_string()))
        } else {
            Err(Error::InvalidUrl(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A two-letter caption language code, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn parse(input: &str) -> Result<Self> {
        if input.len() == 2 && input.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(LanguageCode(input.to_ascii_lowercase()))
        } else {
            Err(Error::InvalidLanguageCode(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
