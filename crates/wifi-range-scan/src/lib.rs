//! # wifi-range-scan
//!
//! Lists the access points the local WiFi radio can currently see and turns
//! each one's signal strength into a rough distance estimate.
//!
//! The crate is organised around a single linear pass:
//!
//! - **Port**: [`WlanScanPort`] -- trait abstracting the platform listing
//!   backend (collect raw text, parse it into readings)
//! - **Adapters**: [`NetshScanner`] runs `netsh wlan show networks mode=bssid`;
//!   [`ReplayScanner`] reads a previously saved listing from disk
//! - **Domain types**: [`NetworkReading`], [`DistanceEstimate`],
//!   [`PathLossModel`]
//! - **Report**: [`ReportRow`] table rendering and the serialisable
//!   [`ScanReport`]
//! - **Orchestration**: [`run_scan`] wires the above into a [`ScanOutcome`]

pub mod adapter;
pub mod domain;
pub mod error;
pub mod port;
pub mod report;
pub mod scan;

// Re-export key types at the crate root for convenience.
pub use adapter::{parse_netsh_output, NetshScanner, ReplayScanner};
pub use domain::estimate::{
    calculate_distance, parse_signal_percent, DistanceEstimate, PathLossModel,
};
pub use domain::reading::NetworkReading;
pub use error::WifiScanError;
pub use port::WlanScanPort;
pub use report::{EstimatedNetwork, ReportRow, ScanReport};
pub use scan::{run_scan, ScanOutcome};
