//! The primary port (driving side) for listing nearby networks.

use crate::domain::reading::NetworkReading;
use crate::error::WifiScanError;

/// Port that abstracts the platform listing backend.
///
/// Collection and parsing are separate steps so the raw text can be logged,
/// saved or replayed independently of how it is interpreted.
///
/// Implementations include:
/// - [`crate::adapter::NetshScanner`] -- subprocess-based.
/// - [`crate::adapter::ReplayScanner`] -- file-based.
pub trait WlanScanPort: Send + Sync {
    /// Short backend identifier used in logs and JSON reports.
    fn name(&self) -> &str;

    /// Fetch the raw listing. Blocks until the backend is done.
    fn collect(&self) -> Result<String, WifiScanError>;

    /// Turn a raw listing into readings, in listing order. Malformed lines
    /// are skipped, never reported as errors.
    fn parse(&self, raw: &str) -> Vec<NetworkReading>;

    /// Collect and parse in one call.
    fn scan(&self) -> Result<Vec<NetworkReading>, WifiScanError> {
        let raw = self.collect()?;
        Ok(self.parse(&raw))
    }
}
