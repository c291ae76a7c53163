use crate::{
    captions,
    error::Result,
    timedtext::{self, Transcript},
    title,
    types::{LanguageCode, VideoUrl},
    util::{HttpClient, HttpClientOptions},
};

/// The public entry point: validates inputs, fetches the watch page and the
/// timed-text document, and turns them into a [`Transcript`] or a title.
///
/// Configuration (language code, HTTP policy, user-agent) is fixed at
/// construction and never mutated, so a shared `&TranscriptClient` can be
/// used from any number of tasks.
pub struct TranscriptClient {
    http: HttpClient,
    language: LanguageCode,
}

impl TranscriptClient {
    /// Creates a client for the given caption language.
    pub fn new(language_code: &str) -> Result<Self> {
        Self::with_http_options(language_code, HttpClientOptions::default())
    }

    /// Creates a client for English captions.
    pub fn default_language() -> Result<Self> {
        Self::new("en")
    }

    /// Creates a client with explicit HTTP options, e.g. a fixed user-agent
    /// for deterministic tests.
    pub fn with_http_options(language_code: &str, options: HttpClientOptions) -> Result<Self> {
        let language = LanguageCode::parse(language_code)?;
        // reqwest client construction only fails on broken TLS backends;
        // surfaced as a transport error with no URL attached.
        let http = HttpClient::with_options(options).map_err(|e| crate::error::Error::Network {
            url: "(client construction)".to_string(),
            source: e,
        })?;

        Ok(Self { http, language })
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Fetches the full transcript for a watch-page URL.
    ///
    /// Pipeline: validate URL, fetch page, locate the caption-track
    /// manifest, fetch the selected track's timed text, parse it. Every
    /// step short-circuits on failure; nothing is retried and no partial
    /// transcript is returned.
    pub async fn get_transcript(&self, video_url: &str) -> Result<Transcript> {
        let video_url = VideoUrl::parse(video_url)?;

        debug!("fetching watch page {}", video_url);
        let html = self.http.fetch_text(video_url.as_str()).await?;

        let tracks = captions::from_html(&html)?;
        let track_url = captions::select_track_url(&tracks, &self.language)?;
        debug!(
            "selected '{}' track out of {} ({})",
            self.language,
            tracks.len(),
            track_url
        );

        let xml = self.http.fetch_text(&track_url).await?;
        let transcript = timedtext::parse(&xml)?;
        info!(
            "fetched {} transcript segments for {}",
            transcript.len(),
            video_url
        );

        Ok(transcript)
    }

    /// Fetches the video title for a watch-page URL.
    pub async fn get_video_title(&self, video_url: &str) -> Result<String> {
        let video_url = VideoUrl::parse(video_url)?;

        debug!("fetching watch page {}", video_url);
        let html = self.http.fetch_text(video_url.as_str()).await?;

        title::from_html(&html)
    }
}
