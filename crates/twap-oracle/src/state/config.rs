use crate::error::OracleError;
use crate::utils::constants::{
    DEFAULT_MAX_DEVIATION_BPS, DEFAULT_MAX_WINDOW, DEFAULT_TWAP_WINDOW, MAX_DEVIATION_BPS_LIMIT,
    MAX_TWAP_WINDOW,
};
use serde::{Deserialize, Serialize};

/// Oracle configuration, fixed at construction.
///
/// Validated once before any state exists; a misconfigured oracle is never
/// partially constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// TWAP lookback used by `default_twap`, in seconds.
    pub default_window: u64,

    /// Largest supported TWAP lookback, in seconds. Also the retention
    /// bound: observations older than `latest - max_window` are evicted
    /// (keeping one margin entry for cutoff interpolation).
    pub max_window: u64,

    /// Maximum relative change between consecutive accepted prices on the
    /// normal update path, in basis points (10_000 = 100%).
    pub max_deviation_bps: u16,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            default_window: DEFAULT_TWAP_WINDOW,
            max_window: DEFAULT_MAX_WINDOW,
            max_deviation_bps: DEFAULT_MAX_DEVIATION_BPS,
        }
    }
}

impl OracleConfig {
    pub fn validate(&self) -> Result<(), OracleError> {
        if self.default_window == 0 {
            return Err(OracleError::InvalidInput("default window must be positive"));
        }
        if self.max_window < self.default_window {
            return Err(OracleError::InvalidInput(
                "maximum window must cover the default window",
            ));
        }
        if self.max_window > MAX_TWAP_WINDOW {
            return Err(OracleError::InvalidInput(
                "maximum window exceeds supported ceiling",
            ));
        }
        if self.max_deviation_bps > MAX_DEVIATION_BPS_LIMIT {
            return Err(OracleError::InvalidInput(
                "deviation bound exceeds 10000 basis points",
            ));
        }
        Ok(())
    }
}
