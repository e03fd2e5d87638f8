//! Port definitions for network listing.
//!
//! The listing backend sits behind a trait so that the `netsh` adapter, the
//! file replay adapter and test doubles can be swapped without touching the
//! estimator or the report.

mod scan_port;

pub use scan_port::WlanScanPort;
