use std::fmt;
use std::time::{Duration, Instant};

use crate::domain::{AssertionError, Check, Hostname};
use crate::infrastructure::runner::{CommandRunner, RunnerError};

/// Outcome of a single check against a single host.
///
/// Assertion failures and command failures are kept apart so the CLI
/// can render them differently, but both count against the run.
#[derive(Debug)]
pub enum CheckOutcome {
    Passed { elapsed: Duration },
    Failed(AssertionError),
    Error(RunnerError),
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed { elapsed } => {
                // Sub-millisecond noise is not worth printing
                let rounded = Duration::from_millis(elapsed.as_millis() as u64);
                write!(f, "ok ({})", humantime::format_duration(rounded))
            }
            Self::Failed(e) => write!(f, "FAILED: {}", e),
            Self::Error(e) => write!(f, "ERROR: {}", e),
        }
    }
}

#[derive(Debug)]
pub struct CheckReport {
    pub name: String,
    pub command: String,
    pub outcome: CheckOutcome,
}

/// Use case: run every check of a suite against one host, sequentially.
pub struct VerifyHost<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> VerifyHost<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    pub fn execute(&self, host: &Hostname, checks: &[Check]) -> Vec<CheckReport> {
        checks
            .iter()
            .map(|check| {
                let command = check.command();
                let started = Instant::now();

                let outcome = match self.runner.run(host, &command) {
                    Ok(output) => match check.evaluate(&output) {
                        Ok(()) => CheckOutcome::Passed {
                            elapsed: started.elapsed(),
                        },
                        Err(e) => {
                            tracing::debug!(host = %host, check = check.name(), error = %e, "assertion failed");
                            CheckOutcome::Failed(e)
                        }
                    },
                    Err(e) => {
                        tracing::debug!(host = %host, check = check.name(), error = %e, "command failed");
                        CheckOutcome::Error(e)
                    }
                };

                CheckReport {
                    name: check.name().to_string(),
                    command,
                    outcome,
                }
            })
            .collect()
    }
}

/// Number of reports that did not pass.
pub fn count_failures(reports: &[CheckReport]) -> usize {
    reports.iter().filter(|r| !r.outcome.is_passed()).count()
}
