//! Domain types: what a scan yields and what it is turned into.

pub mod estimate;
pub mod reading;

pub use estimate::{calculate_distance, parse_signal_percent, DistanceEstimate, PathLossModel};
pub use reading::NetworkReading;
