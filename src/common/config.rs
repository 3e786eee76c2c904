//! Configuration constants and settings for pagesim.
//!
//! The engine reads no files or environment variables. Everything tunable is
//! a plain struct with a `Default` built from the constants below.

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// How many upcoming references the heuristic's short-horizon check covers.
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 5;

/// Default weight of the frequency-so-far feature.
pub const DEFAULT_FREQUENCY_WEIGHT: f64 = 0.15;

/// Default weight of the recency feature.
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.15;

/// Default weight of the remaining-future-frequency feature.
pub const DEFAULT_FUTURE_FREQUENCY_WEIGHT: f64 = 0.30;

/// Default weight of the next-use distance feature.
pub const DEFAULT_NEXT_USE_WEIGHT: f64 = 0.30;

/// Default weight of the short-horizon indicator.
pub const DEFAULT_SHORT_HORIZON_WEIGHT: f64 = 0.10;

/// Shortest random trace generated by default.
pub const DEFAULT_RANDOM_MIN_LEN: usize = 10;

/// Longest random trace generated by default.
pub const DEFAULT_RANDOM_MAX_LEN: usize = 25;

/// Highest page number in a default random trace (pages start at 1).
pub const DEFAULT_RANDOM_MAX_PAGE: u32 = 9;

/// Blend weights for the heuristic scorer.
///
/// The defaults sum to 1.0, with future frequency and next-use distance
/// weighted highest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    pub frequency: f64,
    pub recency: f64,
    pub future_frequency: f64,
    pub next_use: f64,
    pub short_horizon: f64,
}

impl HeuristicWeights {
    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("frequency", self.frequency),
            ("recency", self.recency),
            ("future_frequency", self.future_frequency),
            ("next_use", self.next_use),
            ("short_horizon", self.short_horizon),
        ]
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY_WEIGHT,
            recency: DEFAULT_RECENCY_WEIGHT,
            future_frequency: DEFAULT_FUTURE_FREQUENCY_WEIGHT,
            next_use: DEFAULT_NEXT_USE_WEIGHT,
            short_horizon: DEFAULT_SHORT_HORIZON_WEIGHT,
        }
    }
}

/// Settings for the heuristic replacer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// A page counts as "needed soon" if it recurs within this many steps.
    pub lookahead_window: usize,

    pub weights: HeuristicWeights,
}

impl HeuristicConfig {
    /// Reject weights that would make scores meaningless.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if a weight is negative or not finite, or if
    ///   every weight is zero.
    pub fn validate(&self) -> Result<()> {
        let weights = self.weights.as_array();
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "heuristic weight `{}` must be finite and non-negative, got {}",
                    name, weight
                )));
            }
        }
        if weights.iter().all(|&(_, weight)| weight == 0.0) {
            return Err(Error::InvalidConfig(
                "at least one heuristic weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            weights: HeuristicWeights::default(),
        }
    }
}

/// Settings for a [`crate::Simulator`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub heuristic: HeuristicConfig,
}

impl SimulatorConfig {
    /// Validate every nested section.
    pub fn validate(&self) -> Result<()> {
        self.heuristic.validate()
    }
}

/// Bounds for [`crate::trace::random_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomTraceConfig {
    pub min_len: usize,
    pub max_len: usize,

    /// Pages are drawn uniformly from `1..=max_page`.
    pub max_page: u32,
}

impl RandomTraceConfig {
    /// # Errors
    /// - `Error::InvalidConfig` if `min_len > max_len` or `max_page == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.min_len > self.max_len {
            return Err(Error::InvalidConfig(format!(
                "random trace min_len {} exceeds max_len {}",
                self.min_len, self.max_len
            )));
        }
        if self.max_page == 0 {
            return Err(Error::InvalidConfig(
                "random trace max_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RandomTraceConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_RANDOM_MIN_LEN,
            max_len: DEFAULT_RANDOM_MAX_LEN,
            max_page: DEFAULT_RANDOM_MAX_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = HeuristicWeights::default();
        let sum = w.frequency + w.recency + w.future_frequency + w.next_use + w.short_horizon;
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(w.future_frequency > w.frequency);
        assert!(w.next_use > w.recency);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulatorConfig::default().validate().is_ok());
        assert!(RandomTraceConfig::default().validate().is_ok());
        assert_eq!(HeuristicConfig::default().lookahead_window, 5);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = HeuristicConfig::default();
        config.weights.recency = -0.1;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        config.weights.recency = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let config = HeuristicConfig {
            lookahead_window: 5,
            weights: HeuristicWeights {
                frequency: 0.0,
                recency: 0.0,
                future_frequency: 0.0,
                next_use: 0.0,
                short_horizon: 0.0,
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_random_trace_bounds() {
        let config = RandomTraceConfig {
            min_len: 5,
            max_len: 4,
            max_page: 3,
        };
        assert!(config.validate().is_err());

        let config = RandomTraceConfig {
            max_page: 0,
            ..RandomTraceConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
