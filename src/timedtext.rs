//! Timed-text XML parsing.
//!
//! A timed-text document encodes each caption line as a
//! `<text start="12.34" dur="2.1">content</text>` element. Every `text`
//! element is selected regardless of nesting depth, in document order.

use quick_xml::{events::Event, Reader};

use crate::error::Result;

/// One caption line. `start` keeps the attribute's literal string value so
/// the source precision survives round-tripping; it is never parsed into a
/// number here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub start: String,
    pub text: String,
}

/// An ordered sequence of caption lines, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptSegment> {
        self.segments.iter()
    }
}

impl IntoIterator for Transcript {
    type Item = TranscriptSegment;
    type IntoIter = std::vec::IntoIter<TranscriptSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptSegment;
    type IntoIter = std::slice::Iter<'a, TranscriptSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

fn get_start_attr(e: &quick_xml::events::BytesStart) -> Result<String> {
    let attr = e
        .try_get_attribute("start")
        .map_err(quick_xml::Error::from)?
        .ok_or(quick_xml::Error::TextNotFound)?;

    Ok(attr.unescape_value()?.into_owned())
}

/// Parses a timed-text document into a [`Transcript`]. Malformed markup,
/// including a document truncated before its open elements are closed,
/// fails the whole parse; no partial segment list is returned.
pub fn parse(xml: &str) -> Result<Transcript> {
    let mut reader = Reader::from_str(xml);

    let mut segments: Vec<TranscriptSegment> = Vec::new();
    // Indices into `segments` for the `text` elements currently open.
    // Keeps output in start-tag order even if `text` elements nest.
    let mut open_text: Vec<usize> = Vec::new();
    let mut depth: usize = 0;

    loop {
        match reader.read_event() {
            Err(e) => return Err(e.into()),
            Ok(Event::Eof) => {
                if depth > 0 {
                    return Err(quick_xml::Error::UnexpectedEof(
                        "document ends with unclosed elements".to_string(),
                    )
                    .into());
                }
                break;
            }
            Ok(Event::Start(e)) => {
                depth += 1;
                if e.name().as_ref() == b"text" {
                    open_text.push(segments.len());
                    segments.push(TranscriptSegment {
                        start: get_start_attr(&e)?,
                        text: String::new(),
                    });
                }
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"text" {
                    segments.push(TranscriptSegment {
                        start: get_start_attr(&e)?,
                        text: String::new(),
                    });
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(&idx) = open_text.last() {
                    segments[idx].text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::End(e)) => {
                depth = depth.saturating_sub(1);
                if e.name().as_ref() == b"text" {
                    open_text.pop();
                }
            }
            _ => (),
        }
    }

    Ok(Transcript { segments })
}
