//! Report rendering: the grid table printed to the terminal and the
//! serialisable report behind `--format json`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::domain::estimate::{DistanceEstimate, PathLossModel};
use crate::domain::reading::NetworkReading;

/// Line printed above the table.
pub const BANNER: &str = "\n 🌐 Real-Time Signal Strengths And Distances 🌐";

/// Printed instead of a table when there is nothing to show.
pub const NO_DATA: &str = "No WiFi Data Available.";

/// Cell text for a network whose listing had no `Signal` line.
pub const NOT_AVAILABLE: &str = "N/A";

/// A reading paired with its estimate.
///
/// `estimate` is `None` when the reading has no signal at all, which is
/// reported differently from a signal that is present but unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedNetwork {
    pub reading: NetworkReading,
    pub estimate: Option<DistanceEstimate>,
}

impl EstimatedNetwork {
    pub fn new(reading: NetworkReading, model: &PathLossModel) -> Self {
        let estimate = reading.signal().map(|signal| model.estimate(signal));
        Self { reading, estimate }
    }
}

/// Pair every reading with its estimate, keeping scan order.
pub fn estimate_all(readings: Vec<NetworkReading>, model: &PathLossModel) -> Vec<EstimatedNetwork> {
    readings
        .into_iter()
        .map(|reading| EstimatedNetwork::new(reading, model))
        .collect()
}

// ============================================================================
// Table
// ============================================================================

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "Router")]
    pub router: String,
    #[tabled(rename = "Signal Strength")]
    pub signal_strength: String,
    #[tabled(rename = "Distance")]
    pub distance: String,
}

impl From<&EstimatedNetwork> for ReportRow {
    fn from(network: &EstimatedNetwork) -> Self {
        let signal_strength = network
            .reading
            .signal()
            .unwrap_or(NOT_AVAILABLE)
            .to_owned();
        let distance = network
            .estimate
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |e| e.to_string());

        Self {
            router: network.reading.ssid().to_owned(),
            signal_strength,
            distance,
        }
    }
}

/// Render the banner and the grid table, or [`NO_DATA`] when `networks` is
/// empty.
pub fn render_table(networks: &[EstimatedNetwork]) -> String {
    if networks.is_empty() {
        return NO_DATA.to_owned();
    }

    let rows: Vec<ReportRow> = networks.iter().map(ReportRow::from).collect();
    let table = Table::new(rows).with(Style::modern()).to_string();
    format!("{BANNER}\n{table}")
}

// ============================================================================
// JSON
// ============================================================================

/// Machine-readable form of one run.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub scanned_at: DateTime<Utc>,
    pub backend: String,
    /// User-facing failure message when the listing could not be collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub model: PathLossModel,
    pub networks: Vec<NetworkEntry>,
}

/// One network in a [`ScanReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkEntry {
    pub ssid: String,
    /// Signal text exactly as listed.
    pub signal: Option<String>,
    pub signal_percent: Option<i64>,
    /// `null` when the signal is missing or unparseable.
    pub distance_m: Option<f64>,
}

impl From<&EstimatedNetwork> for NetworkEntry {
    fn from(network: &EstimatedNetwork) -> Self {
        Self {
            ssid: network.reading.ssid().to_owned(),
            signal: network.reading.signal().map(str::to_owned),
            signal_percent: network.reading.signal_percent(),
            distance_m: network.estimate.and_then(|e| e.meters()),
        }
    }
}
