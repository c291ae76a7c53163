//! Crate-wide error type.
//!
//! One flat enum with a variant per failure class, so callers can match
//! broadly (`Err(e)`) or on a specific kind. No variant is ever recovered
//! from internally; every failure propagates to the caller as-is.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input is not a `http(s)://[www.]youtube.com/watch?v=...` URL.
    #[error("invalid watch page URL: {0}")]
    InvalidUrl(String),

    /// The configured language code is not two alphabetic characters.
    #[error("invalid language code: {0:?}")]
    InvalidLanguageCode(String),

    /// Transport-level failure (DNS, TLS, timeout, redirect limit, reset)
    /// while fetching either the watch page or the timed-text document.
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The caption-track manifest could not be located, decoded, or did not
    /// contain a usable track for the configured language.
    #[error("caption manifest not found: {0}")]
    CaptionManifestNotFound(String),

    /// The timed-text response is not well-formed XML.
    #[error("could not parse timed text")]
    SubtitleParsing(#[from] quick_xml::Error),

    /// No `<title>` element in the watch page response.
    #[error("no <title> element found in page")]
    VideoTitleNotFound,
}
