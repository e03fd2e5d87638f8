//! Adapter that replays a `netsh wlan show networks mode=bssid` listing saved
//! to a file (`netsh wlan show networks mode=bssid > scan.txt`).
//!
//! `cmd.exe` redirects write the console code page, Windows PowerShell 5.1
//! writes UTF-16LE with a byte-order mark, PowerShell 7 writes UTF-8. The
//! byte-order mark decides the decoding; without one the bytes are read as
//! UTF-8 with invalid sequences replaced.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::netsh_scanner::parse_netsh_output;
use crate::domain::reading::NetworkReading;
use crate::error::WifiScanError;
use crate::port::WlanScanPort;

/// Scanner backed by a saved listing instead of a live command.
#[derive(Debug, Clone)]
pub struct ReplayScanner {
    path: PathBuf,
}

impl ReplayScanner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WlanScanPort for ReplayScanner {
    fn name(&self) -> &str {
        "replay"
    }

    fn collect(&self) -> Result<String, WifiScanError> {
        let bytes = fs::read(&self.path).map_err(|e| WifiScanError::InputUnreadable {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "replaying saved listing");
        Ok(decode_listing(&bytes))
    }

    fn parse(&self, raw: &str) -> Vec<NetworkReading> {
        parse_netsh_output(raw)
    }
}

/// Decode a saved listing, honouring a UTF-8 or UTF-16 byte-order mark.
fn decode_listing(bytes: &[u8]) -> String {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    // A trailing odd byte cannot form a code unit and is dropped.
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn replays_saved_listing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SSID 1 : Home").unwrap();
        writeln!(file, "    BSSID 1 : 10:20:30:40:50:60").unwrap();
        writeln!(file, "         Signal : 92%").unwrap();

        let scanner = ReplayScanner::new(file.path());
        let readings = scanner.scan().unwrap();
        assert_eq!(readings, vec![NetworkReading::new("Home", Some("92%".to_owned()))]);
    }

    #[test]
    fn missing_file_is_input_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let scanner = ReplayScanner::new(&path);
        match scanner.collect() {
            Err(WifiScanError::InputUnreadable { path: reported, .. }) => {
                assert_eq!(reported, path.display().to_string());
            }
            other => panic!("expected InputUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"SSID 1 : Caf\xe9\nSignal : 40%\n").unwrap();

        let readings = ReplayScanner::new(file.path()).scan().unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].signal(), Some("40%"));
        assert!(readings[0].ssid().starts_with("Caf"));
    }

    fn utf16_file(
        text: &str,
        bom: [u8; 2],
        to_bytes: fn(u16) -> [u8; 2],
    ) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bom).unwrap();
        for unit in text.encode_utf16() {
            file.write_all(&to_bytes(unit)).unwrap();
        }
        file
    }

    #[test]
    fn powershell_utf16le_listing_is_decoded() {
        let file = utf16_file("SSID 1 : Foo\r\nSignal : 80%\r\n", [0xFF, 0xFE], u16::to_le_bytes);

        let readings = ReplayScanner::new(file.path()).scan().unwrap();
        assert_eq!(readings, vec![NetworkReading::new("Foo", Some("80%".to_owned()))]);
    }

    #[test]
    fn utf16be_listing_is_decoded() {
        let file = utf16_file("SSID 1 : Café\nSignal : 33%\n", [0xFE, 0xFF], u16::to_be_bytes);

        let readings = ReplayScanner::new(file.path()).scan().unwrap();
        assert_eq!(readings, vec![NetworkReading::new("Café", Some("33%".to_owned()))]);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFSSID 1 : Foo\nSignal : 10%\n").unwrap();

        let raw = ReplayScanner::new(file.path()).collect().unwrap();
        assert!(raw.starts_with("SSID 1 : Foo"));
    }

    #[test]
    fn odd_trailing_byte_is_dropped() {
        assert_eq!(decode_listing(&[0xFF, 0xFE, b'A', 0x00, b'B']), "A");
    }
}
