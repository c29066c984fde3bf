//! Serde model of the OCR provider's JSON response.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::geometry::{Line, Page, Word};
use crate::text::repair_honorific;
use crate::utils::safe_float_cmp;

/// Top-level response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrResponse {
    /// One entry per processed image or PDF page
    #[serde(default)]
    pub parsed_results: Vec<ParsedResult>,
    /// Set when the provider failed to process the upload
    #[serde(default)]
    pub is_errored_on_processing: bool,
    /// Failure details
    #[serde(default)]
    pub error_message: Option<ErrorMessage>,
}

/// The provider sends either one message or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// Single message
    One(String),
    /// List of messages
    Many(Vec<String>),
}

impl ErrorMessage {
    /// First non-blank message.
    pub fn first(&self) -> Option<&str> {
        let messages: &[String] = match self {
            Self::One(msg) => std::slice::from_ref(msg),
            Self::Many(msgs) => msgs,
        };
        messages
            .iter()
            .map(String::as_str)
            .find(|m| !m.trim().is_empty())
    }
}

/// Recognition output for one image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedResult {
    /// Flat recognized text
    #[serde(default)]
    pub parsed_text: Option<String>,
    /// Word positions, present when the overlay was requested
    #[serde(default)]
    pub text_overlay: Option<TextOverlay>,
}

/// Word and line positions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextOverlay {
    /// Recognized lines
    #[serde(default)]
    pub lines: Vec<OverlayLine>,
}

/// One line of the overlay.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayLine {
    /// Provider's line text
    #[serde(default)]
    pub line_text: Option<String>,
    /// Words in reading order
    #[serde(default)]
    pub words: Vec<OverlayWord>,
    /// Top of the highest word
    #[serde(default)]
    pub min_top: Option<f32>,
    /// Height of the tallest word
    #[serde(default)]
    pub max_height: Option<f32>,
}

/// One word of the overlay.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayWord {
    /// Recognized text
    pub word_text: String,
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Box width
    pub width: f32,
    /// Box height
    pub height: f32,
}

impl OverlayLine {
    fn into_line(self) -> Result<Line> {
        let words: Vec<Word> = self
            .words
            .into_iter()
            .map(|w| Word::new(w.word_text, w.left, w.top, w.width, w.height))
            .collect();
        let text = self
            .line_text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| {
                words
                    .iter()
                    .map(|w| w.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            });
        Line::with_metrics(words, Some(repair_honorific(&text)), self.min_top, self.max_height)
    }
}

impl OcrResponse {
    /// Decode a response.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert the first parsed result into a page.
    ///
    /// Lines without words are dropped and the rest are ordered top to bottom
    /// (ties keep provider order). A result without an overlay becomes a
    /// text-only page.
    ///
    /// # Errors
    ///
    /// [`Error::Provider`] when the provider flagged a failure or returned no result.
    pub fn into_page(self) -> Result<Page> {
        if self.is_errored_on_processing {
            let message = self
                .error_message
                .as_ref()
                .and_then(ErrorMessage::first)
                .unwrap_or("unknown OCR error")
                .to_string();
            return Err(Error::Provider(message));
        }

        let result = self
            .parsed_results
            .into_iter()
            .next()
            .ok_or_else(|| Error::Provider("response contains no parsed results".to_string()))?;
        let full_text = repair_honorific(result.parsed_text.as_deref().unwrap_or_default());

        let Some(overlay) = result.text_overlay else {
            log::warn!("OCR response has no text overlay");
            return Ok(Page::from_text(full_text));
        };

        let total = overlay.lines.len();
        let mut lines = overlay
            .lines
            .into_iter()
            .filter(|l| !l.words.is_empty())
            .map(OverlayLine::into_line)
            .collect::<Result<Vec<_>>>()?;
        if lines.len() < total {
            log::debug!("Dropped {} overlay lines without words", total - lines.len());
        }
        lines.sort_by(|a, b| safe_float_cmp(a.min_top(), b.min_top()));

        Ok(Page::new(lines, full_text))
    }
}
