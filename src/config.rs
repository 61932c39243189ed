use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::error::SeriesError;
use crate::data::model::HeaderSkip;

// ---------------------------------------------------------------------------
// Detector configuration
// ---------------------------------------------------------------------------

/// Everything a detection run needs, passed explicitly to each stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Number of entries in the series, header slot included.
    pub capacity: usize,
    /// Samples strictly above this value are peaks.
    pub threshold: i64,
    /// How the header at the start of the input is discarded.
    pub header_skip: HeaderSkip,
    /// Number of raw values printed in preview mode.
    pub preview_len: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            capacity: 20_000,
            threshold: 500,
            header_skip: HeaderSkip::LineSkip,
            preview_len: 200,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] SeriesError),
}

impl DetectorConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: DetectorConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SeriesError> {
        if self.capacity == 0 {
            return Err(SeriesError::InvalidArgument(
                "capacity must be greater than zero".to_string(),
            ));
        }
        if self.preview_len == 0 {
            return Err(SeriesError::InvalidArgument(
                "preview_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_constants() {
        let config = DetectorConfig::default();
        assert_eq!(config.capacity, 20_000);
        assert_eq!(config.threshold, 500);
        assert_eq!(config.header_skip, HeaderSkip::LineSkip);
        assert_eq!(config.preview_len, 200);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config =
            DetectorConfig::from_json_str(r#"{"threshold": 42, "header_skip": "field-skip"}"#)
                .unwrap();
        assert_eq!(config.threshold, 42);
        assert_eq!(config.header_skip, HeaderSkip::FieldSkip);
        assert_eq!(config.capacity, 20_000);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = DetectorConfig::from_json_str(r#"{"max_clusters": 100}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn zero_capacity_fails_validation() {
        let err = DetectorConfig::from_json_str(r#"{"capacity": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SeriesError::InvalidArgument(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DetectorConfig::from_json_file(Path::new("/nonexistent/peakdet.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
