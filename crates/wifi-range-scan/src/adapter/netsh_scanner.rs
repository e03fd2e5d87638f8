//! Adapter that lists nearby networks by invoking
//! `netsh wlan show networks mode=bssid` and parsing the textual output.
//!
//! Works on any Windows machine with a WLAN adapter. The listing reflects
//! whatever the driver last cached; no fresh scan is triggered.
//!
//! # Design notes
//!
//! The parser only understands the English `netsh` layout: it keys on lines
//! beginning with `SSID` and `Signal`. Everything else in the listing
//! (`BSSID n`, `Radio type`, `Channel`, interface banners, localised
//! messages) is ignored, and marker lines that lack a `:` are skipped rather
//! than failing the whole parse.

use std::process::Command;

use tracing::debug;

use crate::domain::reading::NetworkReading;
use crate::error::WifiScanError;
use crate::port::WlanScanPort;

/// Program run by [`NetshScanner::new`].
pub const NETSH_PROGRAM: &str = "netsh";

/// Arguments requesting the per-BSSID network listing.
pub const NETSH_ARGS: [&str; 4] = ["wlan", "show", "networks", "mode=bssid"];

const SSID_MARKER: &str = "SSID";
const SIGNAL_MARKER: &str = "Signal";

// ---------------------------------------------------------------------------
// NetshScanner
// ---------------------------------------------------------------------------

/// Synchronous scanner that shells out to `netsh`.
///
/// Each call to [`collect`](WlanScanPort::collect) spawns one subprocess,
/// blocks until it exits and returns its buffered stdout.
///
/// # Platform
///
/// Windows only. Elsewhere the spawn fails and the scan reports
/// [`WifiScanError::CommandUnavailable`].
#[derive(Debug, Clone)]
pub struct NetshScanner {
    program: String,
    args: Vec<String>,
}

impl NetshScanner {
    /// Scanner for `netsh wlan show networks mode=bssid`.
    pub fn new() -> Self {
        Self::with_command(NETSH_PROGRAM, NETSH_ARGS)
    }

    /// Run a different program whose output follows the `netsh` layout
    /// (a wrapper script, a remote shell, a fixture generator).
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The command line as it would be typed in a shell.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NetshScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl WlanScanPort for NetshScanner {
    fn name(&self) -> &str {
        "netsh"
    }

    fn collect(&self) -> Result<String, WifiScanError> {
        let command = self.command_line();
        debug!(%command, "running network listing");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| WifiScanError::CommandUnavailable {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WifiScanError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: stderr.trim().to_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = stdout.len(), "network listing captured");
        Ok(stdout)
    }

    fn parse(&self, raw: &str) -> Vec<NetworkReading> {
        parse_netsh_output(raw)
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Fields accumulated for the SSID block currently being read.
struct OpenRecord {
    ssid: String,
    signal: Option<String>,
}

impl OpenRecord {
    fn into_reading(self) -> NetworkReading {
        NetworkReading::new(self.ssid, self.signal)
    }
}

/// Parse the text output of `netsh wlan show networks mode=bssid` into one
/// [`NetworkReading`] per SSID block, in listing order.
///
/// An `SSID` line closes the open block and starts a new one; a `Signal`
/// line sets the open block's signal (the last one wins when an SSID lists
/// several BSSIDs). A `Signal` line outside any block is dropped.
///
/// # Example
///
/// ```text
/// SSID 1 : MyNetwork
///     Network type            : Infrastructure
///     Authentication          : WPA2-Personal
///     Encryption              : CCMP
///     BSSID 1                 : aa:bb:cc:dd:ee:ff
///          Signal             : 84%
///          Radio type         : 802.11ax
///          Channel            : 36
/// ```
pub fn parse_netsh_output(output: &str) -> Vec<NetworkReading> {
    let mut readings = Vec::new();
    let mut open: Option<OpenRecord> = None;

    for (idx, line) in output.lines().enumerate() {
        let trimmed = line.trim();
        let line_no = idx + 1;

        if trimmed.starts_with(SSID_MARKER) {
            let Some(ssid) = value_after_colon(trimmed) else {
                debug!(line_no, "skipping SSID line without a value separator");
                continue;
            };
            if let Some(record) = open.take() {
                readings.push(record.into_reading());
            }
            open = Some(OpenRecord {
                ssid: ssid.to_owned(),
                signal: None,
            });
        } else if trimmed.starts_with(SIGNAL_MARKER) {
            let Some(signal) = value_after_colon(trimmed) else {
                debug!(line_no, "skipping Signal line without a value separator");
                continue;
            };
            match open.as_mut() {
                Some(record) => record.signal = Some(signal.to_owned()),
                None => debug!(line_no, "dropping Signal line outside any SSID block"),
            }
        }
    }

    if let Some(record) = open {
        readings.push(record.into_reading());
    }

    readings
}

/// Text after the first `:`, trimmed. `None` when the line has no colon.
fn value_after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value.trim())
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE_OUTPUT: &str = "\

Interface name : Wi-Fi
There are 2 networks currently visible.

SSID 1 : NETGEAR85-5G
    Network type            : Infrastructure
    Authentication          : WPA2-Personal
    Encryption              : CCMP
    BSSID 1                 : d8:32:14:b0:a0:3e
         Signal             : 84%
         Radio type         : 802.11ax
         Band               : 5 GHz
         Channel            : 48

    BSSID 2                 : d8:32:14:b0:a0:3d
         Signal             : 86%
         Radio type         : 802.11n
         Band               : 2.4 GHz
         Channel            : 5

SSID 2 : NeighborNet
    Network type            : Infrastructure
    Authentication          : WPA2-Personal
    Encryption              : CCMP
    BSSID 1                 : aa:bb:cc:dd:ee:ff
         Signal             : 45%
         Radio type         : 802.11ac
         Band               : 5 GHz
         Channel            : 36
";

    fn reading(ssid: &str, signal: Option<&str>) -> NetworkReading {
        NetworkReading::new(ssid, signal.map(str::to_owned))
    }

    // -- full parse tests -----------------------------------------------------

    #[test]
    fn parse_sample_output_yields_one_reading_per_ssid() {
        let results = parse_netsh_output(SAMPLE_OUTPUT);
        assert_eq!(
            results,
            vec![
                reading("NETGEAR85-5G", Some("86%")),
                reading("NeighborNet", Some("45%")),
            ]
        );
    }

    #[test]
    fn crlf_line_endings() {
        let input = "SSID 1 : Office\r\n    BSSID 1 : 00:11:22:33:44:55\r\n         Signal : 99%\r\n";
        assert_eq!(parse_netsh_output(input), vec![reading("Office", Some("99%"))]);
    }

    #[test]
    fn two_consecutive_blocks_keep_order() {
        let input = "SSID 1 : Foo\nSignal : 80%\nSSID 2 : Bar\nSignal : 40%\n";
        assert_eq!(
            parse_netsh_output(input),
            vec![reading("Foo", Some("80%")), reading("Bar", Some("40%"))]
        );
    }

    // -- empty / minimal inputs -----------------------------------------------

    #[test]
    fn empty_output_returns_empty_vec() {
        assert!(parse_netsh_output("").is_empty());
    }

    #[test]
    fn whitespace_only_output() {
        assert!(parse_netsh_output("   \n\n   \n").is_empty());
    }

    #[test]
    fn no_networks_message() {
        let output = "There are no wireless networks in range.\n";
        assert!(parse_netsh_output(output).is_empty());
    }

    // -- edge cases -----------------------------------------------------------

    #[test]
    fn orphan_signal_line_is_dropped() {
        assert!(parse_netsh_output("Signal : 70%\n").is_empty());

        let input = "Signal : 70%\nSSID 1 : Late\n";
        assert_eq!(parse_netsh_output(input), vec![reading("Late", None)]);
    }

    #[test]
    fn block_without_signal_has_none() {
        let input = "SSID 1 : Quiet\n    Network type : Infrastructure\n";
        assert_eq!(parse_netsh_output(input), vec![reading("Quiet", None)]);
    }

    #[test]
    fn hidden_network_has_empty_ssid() {
        let input = "SSID 3 :\n    BSSID 1 : 00:11:22:33:44:55\n         Signal : 12%\n";
        assert_eq!(parse_netsh_output(input), vec![reading("", Some("12%"))]);
    }

    #[test]
    fn ssid_containing_colons_keeps_everything_after_the_first() {
        let input = "SSID 1 : cafe:guest:2\nSignal : 61%\n";
        assert_eq!(parse_netsh_output(input), vec![reading("cafe:guest:2", Some("61%"))]);
    }

    #[test]
    fn malformed_marker_lines_are_skipped() {
        let input = "\
SSID 1 : Alpha
Signal 55%
SSID without separator
Signal : 30%
";
        // Neither malformed line closes or alters the open block.
        assert_eq!(parse_netsh_output(input), vec![reading("Alpha", Some("30%"))]);
    }

    #[test]
    fn signal_text_is_kept_verbatim() {
        let input = "SSID 1 : Odd\nSignal : very strong\n";
        assert_eq!(parse_netsh_output(input), vec![reading("Odd", Some("very strong"))]);
    }

    #[test]
    fn markers_are_case_sensitive() {
        let input = "ssid 1 : lower\nsignal : 10%\n";
        assert!(parse_netsh_output(input).is_empty());
    }

    // -- command plumbing -----------------------------------------------------

    #[test]
    fn default_command_line() {
        assert_eq!(
            NetshScanner::new().command_line(),
            "netsh wlan show networks mode=bssid"
        );
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let scanner = NetshScanner::with_command("wifi-range-no-such-binary", ["--list"]);
        match scanner.collect() {
            Err(WifiScanError::CommandUnavailable { command, .. }) => {
                assert_eq!(command, "wifi-range-no-such-binary --list");
            }
            other => panic!("expected CommandUnavailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_command_failed() {
        let scanner = NetshScanner::with_command("sh", ["-c", "echo denied >&2; exit 3"]);
        match scanner.collect() {
            Err(WifiScanError::CommandFailed { stderr, .. }) => assert_eq!(stderr, "denied"),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_command_output_is_parsed() {
        let scanner = NetshScanner::with_command("printf", ["SSID 1 : Lab\\nSignal : 77%%\\n"]);
        let readings = scanner.scan().unwrap();
        assert_eq!(readings, vec![reading("Lab", Some("77%"))]);
    }

    proptest! {
        #[test]
        fn never_panics_and_never_invents_records(text in "(SSID|Signal|BSSID|[a-z :%0-9]){0,40}(\n(SSID|Signal|[a-z :%0-9]){0,20}){0,10}") {
            let readings = parse_netsh_output(&text);
            let ssid_lines = text.lines().filter(|l| l.trim().starts_with("SSID")).count();
            prop_assert!(readings.len() <= ssid_lines);
        }
    }
}
