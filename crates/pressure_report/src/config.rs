//! Default input/output file names.
//!
//! ## Environment Variables
//!
//! - `PRESSURE_METADATA_FILE`: default metadata file
//! - `PRESSURE_TRACKING_FILE`: default tracking file
//! - `PRESSURE_OUTPUT_FILE`: default report file

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_METADATA_FILE: &str =
    "20200912-NSH-ATL_886b2a47-3249-4e95-8200-f7cdd8fbbf46_SecondSpectrum_Metadata.json";
pub const DEFAULT_TRACKING_FILE: &str =
    "20200912-NSH-ATL_886b2a47-3249-4e95-8200-f7cdd8fbbf46_SecondSpectrum_Data.jsonl";
pub const DEFAULT_OUTPUT_FILE: &str = "20200912-NSH-ATL-timestampped-on-ball-pressures.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefaults {
    pub metadata_file: String,
    pub tracking_file: String,
    pub output_file: String,
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            tracking_file: DEFAULT_TRACKING_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl ReportDefaults {
    /// Defaults with any non-empty environment overrides applied.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, fallback: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(fallback)
        };

        let defaults = Self::default();
        Self {
            metadata_file: pick("PRESSURE_METADATA_FILE", defaults.metadata_file),
            tracking_file: pick("PRESSURE_TRACKING_FILE", defaults.tracking_file),
            output_file: pick("PRESSURE_OUTPUT_FILE", defaults.output_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides() {
        assert_eq!(ReportDefaults::from_lookup(|_| None), ReportDefaults::default());
    }

    #[test]
    fn test_override_and_blank_value() {
        let defaults = ReportDefaults::from_lookup(|key| match key {
            "PRESSURE_TRACKING_FILE" => Some("other_Data.jsonl".to_string()),
            "PRESSURE_OUTPUT_FILE" => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(defaults.tracking_file, "other_Data.jsonl");
        assert_eq!(defaults.metadata_file, DEFAULT_METADATA_FILE);
        assert_eq!(defaults.output_file, DEFAULT_OUTPUT_FILE);
    }
}
