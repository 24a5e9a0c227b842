use std::process::ExitCode;

/// Exit status for the rewrite run.
///
/// - `Success` (0): every file was processed (with or without changes)
/// - `Failure` (1): the run finished but some files could not be read or written
/// - `Error` (2): the run could not start (config error, unreadable directory, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every file was processed.
    Success,
    /// Some files failed with I/O errors; the others were processed.
    Failure,
    /// The run could not start.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
