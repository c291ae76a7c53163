//! Video title extraction.
//!
//! The title is pulled from the first `<title>...</title>` element with a
//! text pattern over the raw page, not a DOM parse. A `<title>`-looking
//! string inside a script or comment block earlier in the page would win
//! the match; acceptable for watch pages, where the real element comes
//! first.

use regex::Regex;

use crate::error::{Error, Result};

const TITLE_PATTERN: &str = r"<title>(.*?)</title>";
const SITE_SUFFIX: &str = " - YouTube";

/// Extracts the video title from watch-page HTML: first `<title>` element,
/// HTML entities decoded, trailing `" - YouTube"` suffix stripped, trimmed.
pub fn from_html(html: &str) -> Result<String> {
    // Fixed pattern, compilation cannot fail.
    let raw = Regex::new(TITLE_PATTERN)
        .ok()
        .and_then(|re| re.captures(html).and_then(|c| c.get(1)))
        .ok_or(Error::VideoTitleNotFound)?
        .as_str();

    let decoded = html_escape::decode_html_entities(raw);
    let title = decoded.strip_suffix(SITE_SUFFIX).unwrap_or(&decoded);

    Ok(title.trim().to_string())
}
