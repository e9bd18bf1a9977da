use crate::config::DipConfig;
use crate::skinnydip::SkinnyDip;
use crate::unidip::UniDip;
use dip_core::Result;
use dip_stat::PValueStrategy;

/// Builder for configuring and creating UniDip clusterers.
///
/// Nothing is checked until [`build`](Self::build), which validates the whole
/// configuration at once.
#[derive(Debug, Clone, Default)]
pub struct UniDipBuilder {
    config: DipConfig,
}

impl UniDipBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder starting from an existing configuration.
    pub fn from_config(config: DipConfig) -> Self {
        Self { config }
    }

    /// Sets the significance level, in (0, 1).
    ///
    /// Lower values split only on stronger evidence of multimodality.
    pub fn significance(mut self, significance: f64) -> Self {
        self.config.significance = significance;
        self
    }

    /// Sets how p-values are obtained.
    pub fn pval_strategy(mut self, strategy: PValueStrategy) -> Self {
        self.config.pval_strategy = strategy;
        self
    }

    /// Sets the number of bootstrap resamples.
    pub fn n_boots(mut self, n_boots: usize) -> Self {
        self.config.n_boots = n_boots;
        self
    }

    /// Sets the bootstrap seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Whether points outside every cluster may stay unassigned.
    pub fn outliers_allowed(mut self, allowed: bool) -> Self {
        self.config.outliers_allowed = allowed;
        self
    }

    /// Whether clusters may grow into gaps with residual structure.
    pub fn extend_tails(mut self, extend: bool) -> Self {
        self.config.extend_tails = extend;
        self
    }

    /// Builds the configured clusterer.
    pub fn build(self) -> Result<UniDip> {
        UniDip::new(self.config)
    }
}

/// Builder for configuring and creating SkinnyDip clusterers.
#[derive(Debug, Clone, Default)]
pub struct SkinnyDipBuilder {
    inner: UniDipBuilder,
}

impl SkinnyDipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: DipConfig) -> Self {
        Self {
            inner: UniDipBuilder::from_config(config),
        }
    }

    pub fn significance(mut self, significance: f64) -> Self {
        self.inner = self.inner.significance(significance);
        self
    }

    pub fn pval_strategy(mut self, strategy: PValueStrategy) -> Self {
        self.inner = self.inner.pval_strategy(strategy);
        self
    }

    pub fn n_boots(mut self, n_boots: usize) -> Self {
        self.inner = self.inner.n_boots(n_boots);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.inner = self.inner.seed(seed);
        self
    }

    pub fn outliers_allowed(mut self, allowed: bool) -> Self {
        self.inner = self.inner.outliers_allowed(allowed);
        self
    }

    pub fn extend_tails(mut self, extend: bool) -> Self {
        self.inner = self.inner.extend_tails(extend);
        self
    }

    /// Builds the configured clusterer.
    pub fn build(self) -> Result<SkinnyDip> {
        SkinnyDip::new(self.inner.config)
    }
}

/// Convenience function for creating a UniDip clusterer with default settings.
/// Uses:
/// - Significance: 0.01
/// - Table p-values
/// - Outliers allowed, no tail extension
pub fn default_unidip() -> UniDip {
    UniDip::default()
}

/// Convenience function for creating a SkinnyDip clusterer with default settings.
pub fn default_skinnydip() -> SkinnyDip {
    SkinnyDip::default()
}

/// Convenience function for creating a UniDip clusterer with a custom significance level.
pub fn unidip_with_significance(significance: f64) -> Result<UniDip> {
    UniDipBuilder::new().significance(significance).build()
}

/// Convenience function for creating a SkinnyDip clusterer with a custom significance level.
pub fn skinnydip_with_significance(significance: f64) -> Result<SkinnyDip> {
    SkinnyDipBuilder::new().significance(significance).build()
}
