//! Runtime configuration for both pipelines.
//!
//! Every field has a default, so an absent or partial JSON file is valid.
//! Command-line flags are applied on top of whatever the file provides.
//!
//! ```
//! use palate::config::PalateConfig;
//!
//! let config: PalateConfig = serde_json::from_str(r#"{"mining": {"min_lift": 3.0}}"#)
//!     .expect("partial config should parse");
//! assert_eq!(config.mining.min_lift, 3.0);
//! assert_eq!(config.mining.min_confidence, 0.46);
//! assert_eq!(config.recommender.top_k, 10);
//! ```

use crate::error::{PalateError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PalateConfig {
    /// Cuisine rule-mining settings
    pub mining: MiningConfig,
    /// Song recommender settings
    pub recommender: RecommenderConfig,
}

/// Thresholds for per-cuisine association-rule mining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Fixed support threshold; `None` means one recipe's worth (`1 / n`).
    pub min_support: Option<f64>,
    /// Minimum rule confidence
    pub min_confidence: f64,
    /// Minimum rule lift
    pub min_lift: f64,
    /// Minimum itemset length for a mined record
    pub min_length: usize,
    /// Maximum itemset length explored (unbounded when `None`)
    pub max_length: Option<usize>,
    /// Number of itemsets shown per cuisine
    pub top_itemsets: usize,
    /// Rules are reported only when their lift is strictly above this
    pub report_lift_above: f64,
    /// Number of most common ingredients listed in statistics
    pub top_ingredients: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: None,
            min_confidence: 0.46,
            min_lift: 2.0,
            min_length: 2,
            max_length: None,
            top_itemsets: 2,
            report_lift_above: 2.0,
            top_ingredients: 10,
        }
    }
}

/// Settings for the content-based song recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Number of recommendations per query
    pub top_k: usize,
    /// CSV file receiving the startup recommendations
    pub output: PathBuf,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            output: PathBuf::from("song_recommendations.csv"),
        }
    }
}

impl PalateConfig {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| PalateError::io(path, e))?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| PalateError::Json {
            path: path.to_path_buf(),
            line: None,
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`PalateError::Config`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        let m = &self.mining;
        if let Some(s) = m.min_support {
            if !(s > 0.0 && s <= 1.0) {
                return Err(PalateError::Config(format!(
                    "mining.min_support must be in (0, 1], got {s}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&m.min_confidence) {
            return Err(PalateError::Config(format!(
                "mining.min_confidence must be in [0, 1], got {}",
                m.min_confidence
            )));
        }
        if m.min_lift.is_nan() || m.min_lift < 0.0 {
            return Err(PalateError::Config(format!(
                "mining.min_lift must be >= 0, got {}",
                m.min_lift
            )));
        }
        if let Some(max) = m.max_length {
            if max < m.min_length {
                return Err(PalateError::Config(format!(
                    "mining.max_length ({max}) is below mining.min_length ({})",
                    m.min_length
                )));
            }
        }
        if self.recommender.top_k == 0 {
            return Err(PalateError::Config(
                "recommender.top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_thresholds() {
        let config = PalateConfig::default();
        assert_eq!(config.mining.min_support, None);
        assert_eq!(config.mining.min_confidence, 0.46);
        assert_eq!(config.mining.min_lift, 2.0);
        assert_eq!(config.mining.min_length, 2);
        assert_eq!(config.mining.top_itemsets, 2);
        assert_eq!(config.recommender.top_k, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"recommender": {{"top_k": 5}}}}"#).expect("write");

        let config = PalateConfig::load(file.path()).expect("load should succeed");
        assert_eq!(config.recommender.top_k, 5);
        assert_eq!(config.mining, MiningConfig::default());
    }

    #[test]
    fn test_load_rejects_bad_support() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"mining": {{"min_support": 1.5}}}}"#).expect("write");

        let err = PalateConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PalateError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PalateConfig::load(Path::new("/nonexistent/palate.json")).unwrap_err();
        assert!(matches!(err, PalateError::Io { .. }));
    }

    #[test]
    fn test_validate_length_bounds() {
        let mut config = PalateConfig::default();
        config.mining.max_length = Some(1);
        assert!(config.validate().is_err());
        config.mining.max_length = Some(3);
        assert!(config.validate().is_ok());
    }
}
