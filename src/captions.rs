//! Caption-track manifest extraction.
//!
//! The watch page embeds a player-configuration blob containing a
//! `"captionTracks":[...]` JSON array. We pull that array out of the raw
//! HTML with a text pattern rather than parsing the page, then decode it
//! with serde. The pattern stops at the first `]`, which holds as long as
//! the array does not contain nested bracketed values before the first
//! entry's `baseUrl`.

use regex::Regex;
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    types::LanguageCode,
};

/// One entry of the embedded caption-track manifest. Fields other than
/// `language_code` and `base_url` are pass-through data and never validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub language_code: Option<String>,
    pub base_url: Option<String>,
    pub name: Option<serde_json::Value>,
    pub kind: Option<String>,
    pub vss_id: Option<String>,
}

const CAPTION_TRACKS_PATTERN: &str = r#""captionTracks":(\[.*?\])"#;
const BASE_URL_MARKER: &str = r#""baseUrl":"#;

fn get_caption_tracks_str(html: &str) -> Option<&str> {
    // The pattern is fixed, so compilation cannot fail.
    let re = Regex::new(CAPTION_TRACKS_PATTERN).ok()?;
    let fragment = re.captures(html)?.get(1)?.as_str();

    if fragment.contains(BASE_URL_MARKER) {
        Some(fragment)
    } else {
        None
    }
}

/// Decodes the caption-track manifest embedded in `html`.
pub fn from_html(html: &str) -> Result<Vec<CaptionTrack>> {
    let fragment = get_caption_tracks_str(html).ok_or_else(|| {
        Error::CaptionManifestNotFound("no captionTracks array in page".to_string())
    })?;

    serde_json::from_str(fragment).map_err(|e| {
        Error::CaptionManifestNotFound(format!("could not decode captionTracks: {}", e))
    })
}

/// Returns the timed-text URL of the first track matching `language`.
/// Multiple tracks may share a language code (manual vs. auto-generated);
/// the first one in manifest order wins.
pub fn select_track_url(tracks: &[CaptionTrack], language: &LanguageCode) -> Result<String> {
    let track = tracks
        .iter()
        .find(|t| t.language_code.as_deref() == Some(language.as_str()))
        .ok_or_else(|| {
            Error::CaptionManifestNotFound(format!(
                "no caption track for language '{}'",
                language
            ))
        })?;

    track.base_url.clone().ok_or_else(|| {
        Error::CaptionManifestNotFound(format!(
            "caption track for language '{}' has no base URL",
            language
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TRACKS: &str = r#"<script>var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"languageCode":"en","baseUrl":"https://x/en"},{"languageCode":"fr","baseUrl":"https://x/fr"}]}}};</script>"#;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::parse(code).unwrap()
    }

    #[test]
    fn caption_tracks_str() {
        let fragment = get_caption_tracks_str(TWO_TRACKS).expect("no fragment");
        assert!(fragment.starts_with('['));
        assert!(fragment.ends_with(']'));
        assert!(fragment.contains(r#""baseUrl":"https://x/en""#));

        // Key present but fragment has no baseUrl marker
        assert!(get_caption_tracks_str(r#""captionTracks":[{"languageCode":"en"}]"#).is_none());

        // Key absent entirely
        assert!(get_caption_tracks_str("<html><body>nothing here</body></html>").is_none());
    }

    #[test]
    fn selects_matching_language() {
        let tracks = from_html(TWO_TRACKS).expect("could not decode manifest");
        assert_eq!(tracks.len(), 2);

        let url = select_track_url(&tracks, &lang("fr")).expect("no fr track");
        assert_eq!(url, "https://x/fr");

        let url = select_track_url(&tracks, &lang("en")).expect("no en track");
        assert_eq!(url, "https://x/en");
    }

    #[test]
    fn first_match_wins_on_duplicate_language() {
        let html = r#""captionTracks":[{"languageCode":"en","baseUrl":"https://x/manual","name":{"simpleText":"English"}},{"languageCode":"en","baseUrl":"https://x/asr","kind":"asr"}]"#;
        let tracks = from_html(html).unwrap();
        let url = select_track_url(&tracks, &lang("en")).unwrap();
        assert_eq!(url, "https://x/manual");
    }

    #[test]
    fn extraction_is_stateless() {
        // Same input, same output, no hidden state between calls.
        let first = from_html(TWO_TRACKS).unwrap();
        let second = from_html(TWO_TRACKS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let err = from_html("<html></html>").unwrap_err();
        assert!(matches!(err, Error::CaptionManifestNotFound(_)));
    }

    #[test]
    fn undecodable_manifest_is_an_error() {
        // Fragment matches the pattern but is not valid JSON.
        let html = r#""captionTracks":["baseUrl": oops]"#;
        let err = from_html(html).unwrap_err();
        assert!(matches!(err, Error::CaptionManifestNotFound(_)));
    }

    #[test]
    fn missing_language_is_an_error() {
        let tracks = from_html(TWO_TRACKS).unwrap();
        let err = select_track_url(&tracks, &lang("de")).unwrap_err();
        assert!(matches!(err, Error::CaptionManifestNotFound(_)));
    }

    #[test]
    fn track_without_base_url_is_an_error() {
        let html = r#""captionTracks":[{"languageCode":"en","baseUrl":"https://x/en"},{"languageCode":"fr"}]"#;
        let tracks = from_html(html).unwrap();
        let err = select_track_url(&tracks, &lang("fr")).unwrap_err();
        assert!(matches!(err, Error::CaptionManifestNotFound(_)));
    }
}
