use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reference CA-CA contact distance in Ångströms.
pub const DEFAULT_CUTOFF_ANGSTROMS: f64 = 8.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Contact cutoff must be a finite, non-negative distance (got {0})")]
    InvalidCutoff(f64),
    #[error("Unknown scan strategy '{0}' (expected 'direct' or 'incremental')")]
    UnknownStrategy(String),
}

/// How the per-cut contact counts are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanStrategy {
    /// Every cut position re-sums its windows from scratch. Cut positions are
    /// independent and are evaluated in parallel when the `parallel` feature is on.
    Direct,
    /// Running row sums give each cut in O(1) after an O(n²) pass over the map.
    #[default]
    Incremental,
}

impl FromStr for ScanStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "incremental" => Ok(Self::Incremental),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Incremental => write!(f, "incremental"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    pub cutoff: f64,
    pub strategy: ScanStrategy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF_ANGSTROMS,
            strategy: ScanStrategy::default(),
        }
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    cutoff: Option<f64>,
    strategy: Option<ScanStrategy>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, angstroms: f64) -> Self {
        self.cutoff = Some(angstroms);
        self
    }
    pub fn strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let cutoff = self.cutoff.ok_or(ConfigError::MissingParameter("cutoff"))?;
        if !cutoff.is_finite() || cutoff < 0.0 {
            return Err(ConfigError::InvalidCutoff(cutoff));
        }
        Ok(AnalysisConfig {
            cutoff,
            strategy: self.strategy.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_cutoff() {
        let result = AnalysisConfigBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("cutoff")));
    }

    #[test]
    fn builder_rejects_negative_and_nan_cutoffs() {
        assert_eq!(
            AnalysisConfigBuilder::new().cutoff(-1.0).build(),
            Err(ConfigError::InvalidCutoff(-1.0))
        );
        assert!(matches!(
            AnalysisConfigBuilder::new().cutoff(f64::NAN).build(),
            Err(ConfigError::InvalidCutoff(_))
        ));
    }

    #[test]
    fn builder_accepts_zero_cutoff_and_defaults_strategy() {
        let config = AnalysisConfigBuilder::new().cutoff(0.0).build().unwrap();
        assert_eq!(config.cutoff, 0.0);
        assert_eq!(config.strategy, ScanStrategy::Incremental);
    }

    #[test]
    fn default_config_uses_reference_cutoff() {
        assert_eq!(AnalysisConfig::default().cutoff, DEFAULT_CUTOFF_ANGSTROMS);
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("Direct".parse::<ScanStrategy>(), Ok(ScanStrategy::Direct));
        assert_eq!(" incremental ".parse::<ScanStrategy>(), Ok(ScanStrategy::Incremental));
        assert_eq!(
            "fast".parse::<ScanStrategy>(),
            Err(ConfigError::UnknownStrategy("fast".to_string()))
        );
    }

    #[test]
    fn strategy_display_round_trips_through_from_str() {
        for strategy in [ScanStrategy::Direct, ScanStrategy::Incremental] {
            assert_eq!(strategy.to_string().parse::<ScanStrategy>(), Ok(strategy));
        }
    }
}
