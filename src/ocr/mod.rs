//! OCR provider boundary.
//!
//! The engine never talks to the OCR service itself. The caller uploads the
//! roster photo with [`OcrRequestOptions`] and hands the JSON response to
//! [`parse_page`], which turns it into a [`Page`](crate::geometry::Page).
//!
//! ## Example
//!
//! ```
//! use roster_oxide::ocr::parse_page;
//!
//! let json = r#"{
//!     "IsErroredOnProcessing": false,
//!     "ParsedResults": [{
//!         "ParsedText": "G.C. SOTO",
//!         "TextOverlay": {"Lines": [{
//!             "LineText": "G.C. SOTO",
//!             "MinTop": 120, "MaxHeight": 18,
//!             "Words": [
//!                 {"WordText": "G.C.", "Left": 40, "Top": 120, "Width": 36, "Height": 18},
//!                 {"WordText": "SOTO", "Left": 82, "Top": 121, "Width": 50, "Height": 17}
//!             ]
//!         }]}
//!     }]
//! }"#;
//!
//! let page = parse_page(json).unwrap();
//! assert_eq!(page.lines()[0].text(), "G.C. SOTO");
//! assert_eq!(page.max_x(), 132.0);
//! ```

mod payload;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Page;

pub use payload::{ErrorMessage, OcrResponse, OverlayLine, OverlayWord, ParsedResult, TextOverlay};

/// Pass-through settings for the OCR request.
///
/// Roster photos need the table hint and word positions; the engine does not
/// inspect these values, it only documents what it expects to receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrRequestOptions {
    /// Recognition language hint
    pub language: String,
    /// Tabular layout hint
    pub is_table: bool,
    /// Return word and line positions
    pub is_overlay_required: bool,
    /// Let the provider upscale low-resolution photos
    pub scale: bool,
    /// Recognition engine variant
    pub engine: u8,
}

impl Default for OcrRequestOptions {
    fn default() -> Self {
        Self {
            language: "spa".to_string(),
            is_table: true,
            is_overlay_required: true,
            scale: true,
            engine: 2,
        }
    }
}

impl OcrRequestOptions {
    /// Multipart form fields for the request, excluding the image and credentials.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("language", self.language.clone()),
            ("isTable", self.is_table.to_string()),
            ("isOverlayRequired", self.is_overlay_required.to_string()),
            ("scale", self.scale.to_string()),
            ("OCREngine", self.engine.to_string()),
        ]
    }
}

/// Decode a provider response into a page.
pub fn parse_page(json: &str) -> Result<Page> {
    OcrResponse::from_json(json)?.into_page()
}
