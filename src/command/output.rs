use std::process::{ExitStatus, Output};

/// Result of a finished command with captured streams.
///
/// Streams are decoded lossily and stripped of trailing whitespace; a stream
/// left empty after that is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: decode(&output.stdout),
            stderr: decode(&output.stderr),
        }
    }
}

fn decode(stream: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(stream);
    let text = text.trim_end();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    #[cfg(target_family = "unix")]
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    #[cfg(target_family = "unix")]
    #[test]
    fn streams_are_trimmed_and_empty_ones_dropped() {
        let output = CommandOutput::from(Output {
            status: ExitStatus::from_raw(0),
            stdout: b"Submitted batch job 42\n\n".to_vec(),
            stderr: b" \n".to_vec(),
        });

        assert_eq!(Some("Submitted batch job 42".to_string()), output.stdout);
        assert_eq!(None, output.stderr);
        assert!(output.status.success());
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn leading_whitespace_is_kept() {
        let output = CommandOutput::from(Output {
            status: ExitStatus::from_raw(256),
            stdout: Vec::new(),
            stderr: b"  indented error\n".to_vec(),
        });

        assert_eq!(None, output.stdout);
        assert_eq!(Some("  indented error".to_string()), output.stderr);
        assert_eq!(Some(1), output.status.code());
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn signal_termination_has_no_code() {
        // raw wait status 9: killed by SIGKILL
        let output = CommandOutput::from(Output {
            status: ExitStatus::from_raw(9),
            stdout: Vec::new(),
            stderr: Vec::new(),
        });

        assert_eq!(None, output.status.code());
        assert!(!output.status.success());
    }
}
