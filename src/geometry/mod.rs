//! Geometric primitives for roster layout analysis.
//!
//! OCR overlays report every recognized word as an axis-aligned box in pixel
//! space with the origin at the top-left corner of the photo. Words are grouped
//! into [`Line`]s in reading order, and lines into a [`Page`].

use crate::error::{Error, Result};

/// A rectangle in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }
}

/// A single recognized word and its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Recognized text
    pub text: String,
    /// Bounding box in pixel space
    pub bbox: Rect,
}

impl Word {
    /// Create a word from its text and box coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_oxide::geometry::Word;
    ///
    /// let word = Word::new("GARCIA", 120.0, 40.0, 80.0, 18.0);
    /// assert_eq!(word.right_edge(), 200.0);
    /// ```
    pub fn new(text: impl Into<String>, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            bbox: Rect::new(left, top, width, height),
        }
    }

    /// `left + width`.
    pub fn right_edge(&self) -> f32 {
        self.bbox.right()
    }
}

/// A line of words in reading order.
///
/// A line always holds at least one word; the constructors reject empty word
/// lists so that no component downstream ever sees a line without geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    words: Vec<Word>,
    text: String,
    min_top: f32,
    max_height: f32,
}

impl Line {
    /// Build a line from its words, deriving text and vertical metrics.
    ///
    /// `min_top` is the smallest word top, `max_height` the tallest word and
    /// the text is the words joined by single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLine`] when `words` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_oxide::geometry::{Line, Word};
    ///
    /// let line = Line::new(vec![
    ///     Word::new("G.C.", 100.0, 42.0, 40.0, 16.0),
    ///     Word::new("PEREZ", 150.0, 40.0, 60.0, 20.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(line.text(), "G.C. PEREZ");
    /// assert_eq!(line.min_top(), 40.0);
    /// assert_eq!(line.center_x(), 155.0);
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self> {
        Self::with_metrics(words, None, None, None)
    }

    /// Build a line, preferring aggregate metrics reported by the OCR provider.
    ///
    /// Any metric passed as `None` is derived from the words as in [`Line::new`].
    pub fn with_metrics(
        words: Vec<Word>,
        text: Option<String>,
        min_top: Option<f32>,
        max_height: Option<f32>,
    ) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyLine);
        }

        let text = text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| {
                words
                    .iter()
                    .map(|w| w.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            });
        let min_top = min_top.unwrap_or_else(|| {
            words
                .iter()
                .map(|w| w.bbox.top())
                .fold(f32::INFINITY, f32::min)
        });
        let max_height = max_height.unwrap_or_else(|| {
            words.iter().map(|w| w.bbox.height).fold(0.0, f32::max)
        });

        Ok(Self {
            words,
            text,
            min_top,
            max_height,
        })
    }

    /// Words in reading order (never empty).
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Concatenated line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top of the highest word.
    pub fn min_top(&self) -> f32 {
        self.min_top
    }

    /// Height of the tallest word.
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    fn first_word(&self) -> &Word {
        // Non-empty by construction
        &self.words[0]
    }

    fn last_word(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Right edge of the last word.
    pub fn right_edge(&self) -> f32 {
        self.last_word().right_edge()
    }

    /// Horizontal center: `(first.left + last.left + last.width) / 2`.
    pub fn center_x(&self) -> f32 {
        (self.first_word().bbox.left() + self.right_edge()) / 2.0
    }
}

/// One OCR'd roster photo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    lines: Vec<Line>,
    full_text: String,
}

impl Page {
    /// Create a page from lines in top-to-bottom order and the provider's flat text.
    pub fn new(lines: Vec<Line>, full_text: impl Into<String>) -> Self {
        Self {
            lines,
            full_text: full_text.into(),
        }
    }

    /// Create a page for OCR output that carries no bounding boxes.
    pub fn from_text(full_text: impl Into<String>) -> Self {
        Self::new(Vec::new(), full_text)
    }

    /// Lines in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Flat recognized text.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Rightmost word edge over all lines, `0.0` for a page without lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_oxide::geometry::{Line, Page, Word};
    ///
    /// let page = Page::new(
    ///     vec![
    ///         Line::new(vec![Word::new("A", 10.0, 0.0, 90.0, 10.0)]).unwrap(),
    ///         Line::new(vec![Word::new("B", 500.0, 20.0, 400.0, 10.0)]).unwrap(),
    ///     ],
    ///     "A\nB",
    /// );
    /// assert_eq!(page.max_x(), 900.0);
    /// assert_eq!(Page::from_text("A\nB").max_x(), 0.0);
    /// ```
    pub fn max_x(&self) -> f32 {
        self.lines
            .iter()
            .map(Line::right_edge)
            .fold(0.0, f32::max)
    }
}
