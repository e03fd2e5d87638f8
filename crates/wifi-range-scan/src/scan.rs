//! One linear pass: collect -> parse -> estimate -> report.

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::estimate::PathLossModel;
use crate::error::WifiScanError;
use crate::port::WlanScanPort;
use crate::report::{
    estimate_all, render_table, EstimatedNetwork, NetworkEntry, ScanReport, NO_DATA,
};

/// What a single run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The listing was collected; may still hold zero networks.
    Networks(Vec<EstimatedNetwork>),
    /// The listing could not be collected.
    Unavailable(WifiScanError),
}

/// Run the backend once and estimate every network it reports.
///
/// Never fails: collection errors are captured in
/// [`ScanOutcome::Unavailable`] so the caller can print a notice and carry on
/// to the "no data" report.
pub fn run_scan(backend: &dyn WlanScanPort, model: &PathLossModel) -> ScanOutcome {
    let raw = match backend.collect() {
        Ok(raw) => raw,
        Err(err) => {
            warn!(backend = backend.name(), error = %err, "network listing unavailable");
            return ScanOutcome::Unavailable(err);
        }
    };

    let readings = backend.parse(&raw);
    info!(backend = backend.name(), networks = readings.len(), "network listing parsed");
    ScanOutcome::Networks(estimate_all(readings, model))
}

impl ScanOutcome {
    /// Estimated networks, empty when the listing was unavailable.
    pub fn networks(&self) -> &[EstimatedNetwork] {
        match self {
            Self::Networks(networks) => networks,
            Self::Unavailable(_) => &[],
        }
    }

    /// Message to show the user before the report, if collection failed.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Networks(_) => None,
            Self::Unavailable(err) => Some(err.user_message()),
        }
    }

    /// Banner and table, or the "no data" line.
    pub fn render_table(&self) -> String {
        match self {
            Self::Networks(networks) => render_table(networks),
            Self::Unavailable(_) => NO_DATA.to_owned(),
        }
    }

    /// Serialisable report stamped with the current time.
    pub fn to_report(&self, backend: &str, model: &PathLossModel) -> ScanReport {
        ScanReport {
            scanned_at: Utc::now(),
            backend: backend.to_owned(),
            notice: self.notice(),
            model: *model,
            networks: self.networks().iter().map(NetworkEntry::from).collect(),
        }
    }
}
