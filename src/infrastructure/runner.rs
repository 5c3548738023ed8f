use std::process::Command;

use thiserror::Error;

use crate::domain::Hostname;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to execute `{command}` on {host}: {source}")]
    Spawn {
        host: String,
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` on {host} exited with {status}: {stderr}")]
    Failed {
        host: String,
        command: String,
        status: String,
        stderr: String,
    },
}

/// Executes a shell command on a target host and captures stdout.
///
/// Trait seam so the verification use case can be exercised against
/// canned output without a resolver or SSH access.
pub trait CommandRunner {
    fn run(&self, host: &Hostname, command: &str) -> Result<String, RunnerError>;
}

/// Runs commands through `sh -c` for local hosts and over `ssh` in
/// batch mode for everything else.
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, host: &Hostname, command: &str) -> Result<String, RunnerError> {
        let mut cmd = if host.is_local() {
            let mut c = Command::new("sh");
            c.arg("-c").arg(command);
            c
        } else {
            let mut c = Command::new("ssh");
            // BatchMode: fail instead of prompting for a password
            c.arg("-o")
                .arg("BatchMode=yes")
                .arg(host.as_str())
                .arg(command);
            c
        };

        tracing::debug!(host = %host, command, "running check command");

        let output = cmd.output().map_err(|source| RunnerError::Spawn {
            host: host.to_string(),
            command: command.to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(RunnerError::Failed {
                host: host.to_string(),
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localhost() -> Hostname {
        Hostname::new("localhost").unwrap()
    }

    #[test]
    fn test_captures_stdout() {
        let output = ShellRunner::new()
            .run(&localhost(), "printf 'answer section'")
            .unwrap();
        assert_eq!(output, "answer section");
    }

    #[test]
    fn test_nonzero_exit_reports_stderr() {
        let err = ShellRunner::new()
            .run(&localhost(), "echo boom >&2; exit 3")
            .unwrap_err();
        match err {
            RunnerError::Failed { stderr, .. } => assert_eq!(stderr, "boom"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
