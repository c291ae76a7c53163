//! # ytt-rs
//!
//! This crate fetches YouTube video transcripts and titles by scraping the
//! watch page. It locates the caption-track manifest embedded in the page
//! HTML, selects a track by language code, downloads the track's timed-text
//! XML and parses it into time-stamped segments.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ytt_rs::client::TranscriptClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Language code is validated and normalized once, here.
//!     let client = TranscriptClient::new("en").unwrap();
//!
//!     let url = "https://www.youtube.com/watch?v=...";
//!
//!     let title = client.get_video_title(url).await.unwrap();
//!     println!("{}", title);
//!
//!     let transcript = client.get_transcript(url).await.unwrap();
//!     for segment in &transcript {
//!         println!("[{}] {}", segment.start, segment.text);
//!     }
//! }
//! ```
//!
//! The pipeline is strictly sequential and stateless per call: nothing is
//! cached, nothing is retried, and every failure propagates to the caller
//! as one of the [`error::Error`] kinds.

#[forbid(unsafe_code)]
#[macro_use]
extern crate log;

pub mod captions;
pub mod client;
pub mod error;
pub mod timedtext;
pub mod title;
pub mod types;
pub mod util;
