//! Error types for roster analysis.
//!
//! Only boundary failures are errors. A name that cannot be found on the roster
//! is reported through [`ShiftResult::found`](crate::roster::ShiftResult) and
//! degenerate geometry is routed to the text-only matcher, so neither appears here.

/// Result type alias for roster analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing or analyzing a roster page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The OCR provider reported a processing failure or returned no result
    #[error("OCR provider error: {0}")]
    Provider(String),

    /// The provider payload could not be decoded
    #[error("Malformed OCR payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A line was built from an empty word list
    #[error("A line must contain at least one word")]
    EmptyLine,

    /// Configuration values are out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
