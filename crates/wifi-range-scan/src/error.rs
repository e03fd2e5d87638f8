//! Error types for the wifi-range-scan crate.

/// Failures of the collection step.
///
/// None of these is fatal: the orchestrator turns every variant into a
/// printed notice followed by the "no data" report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WifiScanError {
    /// The listing command could not be launched at all (missing binary,
    /// wrong platform, permission denied, spawn I/O error).
    #[error("failed to run `{command}`: {reason}")]
    CommandUnavailable {
        /// The command line that was attempted.
        command: String,
        /// Description of the launch failure.
        reason: String,
    },

    /// The listing command ran but exited with a non-zero status.
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// Rendered exit status.
        status: String,
        /// Trimmed standard error of the command.
        stderr: String,
    },

    /// A saved listing could not be read back from disk.
    #[error("failed to read scan listing from {path}: {reason}")]
    InputUnreadable {
        /// The file that was requested.
        path: String,
        /// Description of the I/O failure.
        reason: String,
    },
}

/// Notice shown when the listing command exits unsuccessfully.
pub const COMMAND_FAILED_NOTICE: &str =
    "Failed To Retrieve WiFi Networks. Are You Sure You're On Windows?";

impl WifiScanError {
    /// The line printed to the user for this failure.
    ///
    /// A command that ran and failed is reported differently from one that
    /// could not be started.
    pub fn user_message(&self) -> String {
        match self {
            Self::CommandFailed { .. } => COMMAND_FAILED_NOTICE.to_owned(),
            other => format!("An error occurred: {other}"),
        }
    }
}
