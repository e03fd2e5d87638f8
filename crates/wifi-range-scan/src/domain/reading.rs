//! A single network as it appeared in one listing.

use super::estimate::parse_signal_percent;

/// One SSID block from a listing.
///
/// The signal is kept exactly as the listing printed it (for example
/// `"84%"`) so the report can echo it back unchanged; the numeric
/// percentage is derived on demand by [`signal_percent`](Self::signal_percent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkReading {
    ssid: String,
    signal: Option<String>,
}

impl NetworkReading {
    /// Build a reading from an SSID and the raw signal text, if the block had
    /// a `Signal` line.
    pub fn new(ssid: impl Into<String>, signal: Option<String>) -> Self {
        Self {
            ssid: ssid.into(),
            signal,
        }
    }

    /// Network name. Empty for hidden networks.
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// Raw signal text, or `None` when the block carried no `Signal` line.
    pub fn signal(&self) -> Option<&str> {
        self.signal.as_deref()
    }

    /// Signal strength as an integer percentage, or `None` when it is absent
    /// or not a number.
    pub fn signal_percent(&self) -> Option<i64> {
        self.signal().and_then(parse_signal_percent)
    }
}
