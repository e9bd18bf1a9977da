//! Clustering configuration

use dip_core::{Error, Result};
use dip_stat::{PValueStrategy, SignificanceEstimator, DEFAULT_N_BOOTS, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

/// Default significance level.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.01;

/// Options shared by UniDip and SkinnyDip.
///
/// Missing fields take their defaults when deserializing.
///
/// # Examples
///
/// ```rust
/// use dip_cluster::DipConfig;
/// use dip_stat::PValueStrategy;
///
/// let config: DipConfig =
///     serde_json::from_str(r#"{"pval_strategy": "bootstrap", "n_boots": 500}"#).unwrap();
/// assert_eq!(config.pval_strategy, PValueStrategy::Bootstrap);
/// assert_eq!(config.significance, 0.01);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DipConfig {
    /// Split threshold. Unimodality is rejected when the p-value is below it.
    pub significance: f64,
    pub pval_strategy: PValueStrategy,
    /// Resamples per bootstrap null distribution.
    pub n_boots: usize,
    /// Seed for the bootstrap resamples.
    pub seed: u64,
    /// Leaves points outside every cluster as noise.
    pub outliers_allowed: bool,
    /// Grows clusters into gaps that still hold structure.
    pub extend_tails: bool,
}

impl Default for DipConfig {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            pval_strategy: PValueStrategy::Table,
            n_boots: DEFAULT_N_BOOTS,
            seed: DEFAULT_SEED,
            outliers_allowed: true,
            extend_tails: false,
        }
    }
}

impl DipConfig {
    /// Checks the configuration before any computation.
    pub fn validate(&self) -> Result<()> {
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(Error::invalid_significance(self.significance));
        }
        if self.n_boots == 0 {
            return Err(Error::InvalidParameter(
                "n_boots must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Creates the p-value estimator for this configuration.
    pub fn estimator(&self) -> Result<SignificanceEstimator> {
        self.validate()?;
        SignificanceEstimator::from_config(self.pval_strategy, self.n_boots, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DipConfig::default();
        assert_eq!(config.significance, 0.01);
        assert_eq!(config.pval_strategy, PValueStrategy::Table);
        assert_eq!(config.n_boots, 2000);
        assert!(config.outliers_allowed);
        assert!(!config.extend_tails);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_significance() {
        for significance in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            let config = DipConfig {
                significance,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(Error::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_zero_boots() {
        let config = DipConfig {
            n_boots: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(config.estimator().is_err());
    }

    #[test]
    fn test_serde_defaults_and_unknown_strategy() {
        let config: DipConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DipConfig::default());

        let config: DipConfig =
            serde_json::from_str(r#"{"significance": 0.05, "extend_tails": true}"#).unwrap();
        assert_eq!(config.significance, 0.05);
        assert!(config.extend_tails);

        let parsed: std::result::Result<DipConfig, _> =
            serde_json::from_str(r#"{"pval_strategy": "kde"}"#);
        assert!(parsed.is_err());
    }
}
