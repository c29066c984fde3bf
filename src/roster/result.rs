//! The engine's output record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::RosterConfig;
use crate::error::Result;

/// Where a person works on a given roster.
///
/// Every field is always populated; sub-steps that could not determine a
/// value leave the configured placeholder instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResult {
    /// Whether the name was located on the page
    pub found: bool,
    /// Roster date (header date, or the caller's fallback)
    pub date: NaiveDate,
    /// Query name, trimmed and upper-cased
    pub target_name: String,
    /// Shift label, overflow service or explicit time range
    pub shift: String,
    /// `HH:MM` or the time placeholder
    pub start_time: String,
    /// `HH:MM` or the time placeholder
    pub end_time: String,
    /// Likely co-workers; a single placeholder entry when none were found
    pub colleagues: Vec<String>,
    /// Human-readable context for manual checking
    pub raw_context: String,
}

impl ShiftResult {
    pub(crate) fn not_found(date: NaiveDate, target_name: String, config: &RosterConfig) -> Self {
        let placeholders = &config.placeholders;
        Self {
            found: false,
            date,
            target_name,
            shift: placeholders.shift.clone(),
            start_time: placeholders.time.clone(),
            end_time: placeholders.time.clone(),
            colleagues: vec![placeholders.no_colleagues.clone()],
            raw_context: placeholders.not_found.clone(),
        }
    }

    /// Serialize to pretty-printed JSON with camelCase keys.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_uses_placeholders() {
        let config = RosterConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 12, 11).unwrap();
        let result = ShiftResult::not_found(date, "SOTO".into(), &config);
        assert!(!result.found);
        assert_eq!(result.shift, "--");
        assert_eq!(result.start_time, "--:--");
        assert_eq!(result.end_time, "--:--");
        assert_eq!(result.colleagues, vec!["none detected".to_string()]);
        assert_eq!(result.raw_context, "target not found");
    }

    #[test]
    fn test_json_shape() {
        let config = RosterConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let json = ShiftResult::not_found(date, "SOTO".into(), &config).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["date"], "2025-01-05");
        assert_eq!(value["targetName"], "SOTO");
        assert_eq!(value["startTime"], "--:--");
        assert_eq!(value["rawContext"], "target not found");
        assert_eq!(value["found"], false);
    }
}
