//! Configuration types for the engine

use crate::error::{EngineError, Result};

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Co-occurrence window in words (2 links adjacent words only)
    pub window_size: usize,
    /// Damping factor of the rank update
    pub damping: f64,
    /// Hard cap on rank iterations
    pub max_iterations: usize,
    /// Convergence threshold on the largest per-word rank change
    pub threshold: f64,
    /// Words with fewer characters are dropped before ranking
    pub minimum_word_length: usize,
    /// Re-attach split-off terminal punctuation to selected sentences
    pub keep_marks: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: 2,
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-5,
            minimum_word_length: 0,
            keep_marks: false,
        }
    }
}

impl EngineConfig {
    /// Create a configuration that trades speed for tighter convergence
    pub fn precise() -> Self {
        Self {
            max_iterations: 500,
            threshold: 1e-9,
            ..Self::default()
        }
    }

    /// Create a fast configuration with a low iteration cap
    pub fn fast() -> Self {
        Self {
            max_iterations: 30,
            threshold: 1e-4,
            ..Self::default()
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Check that every parameter is usable by the ranking stage.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(EngineError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "threshold must be a positive number, got {}",
                self.threshold
            )));
        }
        if self.window_size < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "window_size must be at least 2, got {}",
                self.window_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::precise().validate().is_ok());
        assert!(EngineConfig::fast().validate().is_ok());
        assert_eq!(EngineConfig::balanced(), EngineConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            EngineConfig {
                damping: 1.0,
                ..EngineConfig::default()
            },
            EngineConfig {
                damping: f64::NAN,
                ..EngineConfig::default()
            },
            EngineConfig {
                max_iterations: 0,
                ..EngineConfig::default()
            },
            EngineConfig {
                threshold: 0.0,
                ..EngineConfig::default()
            },
            EngineConfig {
                window_size: 1,
                ..EngineConfig::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(EngineError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }
}
