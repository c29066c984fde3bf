//! Configuration for roster analysis.
//!
//! The engine classifies text with fixed heuristic thresholds tuned for a
//! near-uniform three-column roster. They live here as named values instead of
//! literals so a caller can tune them, or later compute them from detected
//! column edges.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::ColumnBucket;

/// Horizontal split points, as fractions of the page width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnThresholds {
    /// Ratios below this fall in the left bucket
    pub left_split: f32,
    /// Ratios below this (and not left) fall in the middle bucket
    pub right_split: f32,
}

impl Default for ColumnThresholds {
    fn default() -> Self {
        Self {
            left_split: 0.35,
            right_split: 0.65,
        }
    }
}

/// How the queried name is matched against line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatch {
    /// Case-insensitive substring containment.
    ///
    /// "RUIZ" also matches "RUIZA"; kept as the default because it is what
    /// roster users have come to rely on with partial surnames.
    #[default]
    Substring,
    /// Case-insensitive match on whole tokens only.
    Token,
}

/// Shift label attached to each column bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftLabels {
    /// Left column
    pub left: String,
    /// Middle column
    pub mid: String,
    /// Right column
    pub right: String,
}

impl Default for ShiftLabels {
    fn default() -> Self {
        Self {
            left: "MAÑANA".to_string(),
            mid: "TARDE".to_string(),
            right: "NOCHE".to_string(),
        }
    }
}

impl ShiftLabels {
    /// Label for a column bucket.
    pub fn for_bucket(&self, bucket: ColumnBucket) -> &str {
        match bucket {
            ColumnBucket::Left => &self.left,
            ColumnBucket::Mid => &self.mid,
            ColumnBucket::Right => &self.right,
        }
    }

    /// All labels, left to right.
    pub fn all(&self) -> [&str; 3] {
        [&self.left, &self.mid, &self.right]
    }
}

/// Strings returned when a sub-step cannot determine a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    /// Start/end time when no time range was found
    pub time: String,
    /// Shift when the target was not found
    pub shift: String,
    /// Overflow service when no header maps to the target's column
    pub service: String,
    /// Single colleague entry when nobody else shares the slot
    pub no_colleagues: String,
    /// Single colleague entry on the text-only path
    pub text_only_colleagues: String,
    /// Raw context when the target was not found
    pub not_found: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            time: "--:--".to_string(),
            shift: "--".to_string(),
            service: "SERVICIO".to_string(),
            no_colleagues: "none detected".to_string(),
            text_only_colleagues: "no layout data: check raw context".to_string(),
            not_found: "target not found".to_string(),
        }
    }
}

/// Roster analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Column split ratios
    pub column: ColumnThresholds,

    /// Only lines whose top is above this y (pixels) are searched for the roster date.
    pub header_zone_max_top: f32,

    /// Service headers may sit this many pixels above the overflow marker and
    /// still belong to the overflow section.
    pub overflow_header_slack: f32,

    /// Maximum vertical distance (pixels) between the target and a colleague.
    pub vertical_window: f32,

    /// Lines shorter than this (in characters) are never colleagues.
    pub min_colleague_chars: usize,

    /// Name matching policy.
    pub name_match: NameMatch,

    /// Keywords that open the overflow section.
    pub overflow_markers: Vec<String>,

    /// Special-service names recognized in the overflow section.
    pub service_keywords: Vec<String>,

    /// Lines containing any of these are headers or labels, not people.
    pub colleague_denylist: Vec<String>,

    /// Prefix of the shift label for overflow assignments.
    pub overflow_prefix: String,

    /// Per-column shift labels.
    pub shift_labels: ShiftLabels,

    /// Placeholder strings.
    pub placeholders: Placeholders,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl RosterConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            column: ColumnThresholds::default(),
            header_zone_max_top: 500.0,
            overflow_header_slack: 50.0,
            vertical_window: 150.0,
            min_colleague_chars: 5,
            name_match: NameMatch::Substring,
            overflow_markers: strings(&["SALIENTES"]),
            service_keywords: strings(&[
                "PENITENCIARIO",
                "SUBDELEGACION",
                "PUERTAS",
                "ACUARTELAMIENTO",
                "CONTROLES",
                "PATRULLA",
                "SEGURIDAD",
                "PLANA MAYOR",
            ]),
            colleague_denylist: strings(&[
                "SERVICIO",
                "HORAS",
                "MAÑANA",
                "TARDE",
                "NOCHE",
                "SALIENTES",
                "COMANDANCIA",
            ]),
            overflow_prefix: "OVERFLOW".to_string(),
            shift_labels: ShiftLabels::default(),
            placeholders: Placeholders::default(),
        }
    }

    /// Set the column split ratios.
    pub fn with_column_thresholds(mut self, left_split: f32, right_split: f32) -> Self {
        self.column = ColumnThresholds {
            left_split,
            right_split,
        };
        self
    }

    /// Set the header zone cutoff used for date detection.
    pub fn with_header_zone_max_top(mut self, y: f32) -> Self {
        self.header_zone_max_top = y;
        self
    }

    /// Set the colleague vertical proximity window.
    pub fn with_vertical_window(mut self, window: f32) -> Self {
        self.vertical_window = window;
        self
    }

    /// Set the name matching policy.
    pub fn with_name_match(mut self, mode: NameMatch) -> Self {
        self.name_match = mode;
        self
    }

    /// Replace the overflow service keywords.
    pub fn with_service_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_oxide::config::RosterConfig;
    ///
    /// let config = RosterConfig::from_json(r#"{"vertical_window": 90.0}"#).unwrap();
    /// assert_eq!(config.vertical_window, 90.0);
    /// assert_eq!(config.column.left_split, 0.35);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file written as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        let ColumnThresholds {
            left_split,
            right_split,
        } = self.column;
        if !(left_split > 0.0 && right_split < 1.0 && left_split < right_split) {
            return Err(Error::InvalidConfig(format!(
                "column splits must satisfy 0 < left_split < right_split < 1, got {} and {}",
                left_split, right_split
            )));
        }
        if !(self.vertical_window > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "vertical_window must be positive, got {}",
                self.vertical_window
            )));
        }
        if !(self.header_zone_max_top > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "header_zone_max_top must be positive, got {}",
                self.header_zone_max_top
            )));
        }
        if !(self.overflow_header_slack >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "overflow_header_slack must not be negative, got {}",
                self.overflow_header_slack
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RosterConfig::default();
        assert_eq!(config.column.left_split, 0.35);
        assert_eq!(config.column.right_split, 0.65);
        assert_eq!(config.header_zone_max_top, 500.0);
        assert_eq!(config.name_match, NameMatch::Substring);
        assert_eq!(config.placeholders.time, "--:--");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shift_labels_for_bucket() {
        let labels = ShiftLabels::default();
        assert_eq!(labels.for_bucket(ColumnBucket::Left), "MAÑANA");
        assert_eq!(labels.for_bucket(ColumnBucket::Mid), "TARDE");
        assert_eq!(labels.for_bucket(ColumnBucket::Right), "NOCHE");
    }

    #[test]
    fn test_builder() {
        let config = RosterConfig::new()
            .with_column_thresholds(0.3, 0.7)
            .with_vertical_window(80.0)
            .with_header_zone_max_top(300.0)
            .with_name_match(NameMatch::Token)
            .with_service_keywords(["PUERTO"]);
        assert_eq!(config.column.left_split, 0.3);
        assert_eq!(config.vertical_window, 80.0);
        assert_eq!(config.header_zone_max_top, 300.0);
        assert_eq!(config.name_match, NameMatch::Token);
        assert_eq!(config.service_keywords, vec!["PUERTO".to_string()]);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = RosterConfig::from_json(
            r#"{"column": {"left_split": 0.3}, "name_match": "token", "overflow_prefix": "SALIENTE"}"#,
        )
        .unwrap();
        assert_eq!(config.column.left_split, 0.3);
        assert_eq!(config.column.right_split, 0.65);
        assert_eq!(config.name_match, NameMatch::Token);
        assert_eq!(config.overflow_prefix, "SALIENTE");
        assert_eq!(config.shift_labels, ShiftLabels::default());
    }

    #[test]
    fn test_from_json_rejects_inverted_splits() {
        let err = RosterConfig::from_json(r#"{"column": {"left_split": 0.7, "right_split": 0.4}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_bad_windows() {
        assert!(RosterConfig::new().with_vertical_window(0.0).validate().is_err());
        assert!(RosterConfig::new().with_vertical_window(f32::NAN).validate().is_err());
        assert!(RosterConfig::new().with_header_zone_max_top(-1.0).validate().is_err());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(RosterConfig::from_json("{"), Err(Error::Payload(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"min_colleague_chars": 3}}"#).unwrap();
        let config = RosterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.min_colleague_chars, 3);
    }

    #[test]
    fn test_from_missing_file() {
        let err = RosterConfig::from_file("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
