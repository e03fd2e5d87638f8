//! wifi-range CLI
//!
//! Prints the access points the local WiFi adapter can see, their signal
//! strength and a rough distance estimate.
//!
//! # Usage
//!
//! ```bash
//! # Live listing via netsh (Windows)
//! wifi-range
//!
//! # Replay a listing saved with `netsh wlan show networks mode=bssid > scan.txt`
//! wifi-range --input scan.txt --no-pause
//!
//! # Machine-readable output
//! wifi-range --format json
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

pub mod scan;

/// wifi-range command line interface
#[derive(Parser, Debug)]
#[command(name = "wifi-range")]
#[command(author, version, about = "Nearby WiFi routers with signal strength and estimated distance")]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Read a saved `netsh wlan show networks mode=bssid` listing instead of running netsh
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Exit immediately instead of waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Whether to hold the terminal open after printing.
    pub fn should_pause(&self, stdin_is_terminal: bool) -> bool {
        !self.no_pause && self.format == OutputFormat::Table && stdin_is_terminal
    }
}
