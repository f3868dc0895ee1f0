use std::process::ExitCode;

use crate::findings::Reporter;

/// Exit status of a run.
///
/// - `Success` (0): every check passed
/// - `Failure` (1): the run completed with at least one failure finding
/// - `Error` (2): the run aborted (unreadable file, malformed locale JSON, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_reporter(reporter: &Reporter) -> Self {
        if reporter.has_failures() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
