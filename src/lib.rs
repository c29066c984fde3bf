// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::neg_cmp_op_on_partial_ord)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Roster Oxide
//!
//! Geometric duty-roster reconstruction from OCR output.
//!
//! A photographed duty roster is a grid of names under shift headers, followed
//! by an irregular "salientes" section listing special-service assignments.
//! OCR returns words and their pixel boxes but no table structure. This crate
//! finds a named person on such a page and infers, from coordinates alone:
//!
//! - **Shift**: which of the three columns (morning/afternoon/night) they sit in
//! - **Service**: which special service they were assigned in the overflow section
//! - **Times**: an explicit `HH:MM-HH:MM` range written next to the name
//! - **Colleagues**: names listed a few rows above or below in the same column
//! - **Date**: the long-form roster date printed in the header
//!
//! When the OCR output has no word positions, a lower-fidelity text-only
//! matcher still produces an answer.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use roster_oxide::ocr::parse_page;
//! use roster_oxide::roster::RosterScanner;
//!
//! # fn main() -> Result<(), roster_oxide::Error> {
//! let json = r#"{"ParsedResults": [{"ParsedText": "TARDE\nG.C. SOTO 14:00-22:00"}]}"#;
//! let page = parse_page(json)?;
//!
//! let fallback = NaiveDate::from_ymd_opt(2025, 12, 11).unwrap();
//! let result = RosterScanner::default().scan(&page, "soto", fallback);
//! assert!(result.found);
//! assert_eq!(result.start_time, "14:00");
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Layout analysis
pub mod geometry;
pub mod layout;

// Text normalization
pub mod text;

// OCR provider boundary
pub mod ocr;

// Shift lookup pipeline
pub mod roster;

// Re-exports
pub use config::{NameMatch, RosterConfig};
pub use error::{Error, Result};
pub use geometry::{Line, Page, Word};
pub use roster::{find_user_shift, RosterScanner, ShiftResult};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values,
    /// so a line with a corrupt coordinate sorts to the bottom of the page.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "roster_oxide");
    }
}
