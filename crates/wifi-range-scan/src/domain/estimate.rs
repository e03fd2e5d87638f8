//! Log-distance path-loss range estimation.
//!
//! The listing reports signal quality as a percentage. It is mapped onto an
//! RSSI scale with `rssi = -100 + pct` and fed through the log-distance model
//!
//! ```text
//! d = 10 ^ ((P_tx - rssi) / (10 * n))
//! ```
//!
//! with a reference power `P_tx = -30 dBm` and exponent `n = 2.7`. The result
//! is rounded to centimetres. Values outside 0-100 % are not clamped.

use std::fmt;

use serde::Serialize;

/// Reference received power at one metre, in dBm.
pub const DEFAULT_TX_POWER_DBM: f64 = -30.0;

/// Path-loss exponent for an indoor environment with light obstruction.
pub const DEFAULT_PATH_LOSS_EXPONENT: f64 = 2.7;

/// Parameters of the log-distance model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathLossModel {
    /// Received power at the one-metre reference distance (dBm).
    pub tx_power_dbm: f64,
    /// Path-loss exponent `n`.
    pub path_loss_exponent: f64,
}

impl Default for PathLossModel {
    fn default() -> Self {
        Self {
            tx_power_dbm: DEFAULT_TX_POWER_DBM,
            path_loss_exponent: DEFAULT_PATH_LOSS_EXPONENT,
        }
    }
}

impl PathLossModel {
    /// Map a signal percentage onto the RSSI scale used by the model.
    ///
    /// `-100 + (pct / 100) * 100`, which is exactly `-100 + pct`.
    pub fn pct_to_rssi(pct: i64) -> f64 {
        -100.0 + pct as f64
    }

    /// Unrounded distance in metres for an RSSI value.
    pub fn distance_m(&self, rssi_dbm: f64) -> f64 {
        10.0_f64.powf((self.tx_power_dbm - rssi_dbm) / (10.0 * self.path_loss_exponent))
    }

    /// Estimate the distance for a raw signal string such as `"84%"`.
    pub fn estimate(&self, signal: &str) -> DistanceEstimate {
        match parse_signal_percent(signal) {
            Some(pct) => {
                let meters = round_centimetres(self.distance_m(Self::pct_to_rssi(pct)));
                DistanceEstimate::Meters(meters)
            }
            None => DistanceEstimate::Invalid,
        }
    }
}

/// Estimate with the default model.
pub fn calculate_distance(signal: &str) -> DistanceEstimate {
    PathLossModel::default().estimate(signal)
}

/// Parse a signal string as an integer percentage.
///
/// Surrounding whitespace and one trailing `%` are ignored. Anything that is
/// not an integer after that (including the empty string) yields `None`.
pub fn parse_signal_percent(signal: &str) -> Option<i64> {
    let text = signal.trim();
    let digits = text.strip_suffix('%').unwrap_or(text).trim();
    digits.parse::<i64>().ok()
}

fn round_centimetres(meters: f64) -> f64 {
    (meters * 100.0).round() / 100.0
}

/// Result of converting one signal reading into a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceEstimate {
    /// Estimated distance, rounded to two decimals.
    Meters(f64),
    /// The signal text was not an integer percentage.
    Invalid,
}

impl DistanceEstimate {
    /// The numeric estimate, if there is one.
    pub fn meters(&self) -> Option<f64> {
        match self {
            Self::Meters(m) => Some(*m),
            Self::Invalid => None,
        }
    }
}

impl fmt::Display for DistanceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole values keep one decimal ("12.0 meters", not "12 meters").
            Self::Meters(m) if m.is_finite() && m.fract() == 0.0 => write!(f, "{m:.1} meters"),
            Self::Meters(m) => write!(f, "{m} meters"),
            Self::Invalid => f.write_str("Invalid"),
        }
    }
}
