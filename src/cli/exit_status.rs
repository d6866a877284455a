use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Scan completed and output was produced
/// - `Error` (1): Scan failed (bad arguments, I/O, parse, malformed call)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed and output was produced.
    Success,
    /// Scan failed (bad arguments, I/O, parse, malformed call).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(1));
    }
}
