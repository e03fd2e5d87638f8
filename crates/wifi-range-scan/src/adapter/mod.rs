//! Adapter implementations for the [`WlanScanPort`](crate::port::WlanScanPort) port.
//!
//! - [`NetshScanner`]: runs `netsh wlan show networks mode=bssid` (Windows).
//! - [`ReplayScanner`]: reads a saved `netsh` listing from a file, for
//!   offline runs and reproducing reports from other machines.

pub(crate) mod netsh_scanner;
pub mod replay_scanner;

pub use netsh_scanner::parse_netsh_output;
pub use netsh_scanner::{NetshScanner, NETSH_ARGS, NETSH_PROGRAM};
pub use replay_scanner::ReplayScanner;
