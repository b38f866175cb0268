use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// Classified result of one solver invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The solver reached a valid terminal state; wall-clock runtime attached.
    Success(Duration),
    /// The solver was still running when the time budget elapsed and was killed.
    Timeout,
    /// The solver exited with a code outside the accepted set.
    /// `None` means it was terminated by a signal.
    AbnormalExit(Option<i32>),
    /// The solver process could not be launched at all.
    StartError(String),
}

impl Outcome {
    /// Runtime of the attempt, present only for `Success`.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Outcome::Success(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// One attempt: which instance was run and how it ended.
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    pub file_name: String,
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Which non-zero exit codes count as a valid solver result.
///
/// SAT solvers conventionally signal their verdict through the exit code —
/// minisat and picosat exit 10 for SAT and 20 for UNSAT. Both are legitimate
/// completions, not crashes, and must be timed like an exit-0 run.
#[derive(Debug, Clone)]
pub struct ExitPolicy {
    accepted: Vec<i32>,
}

impl ExitPolicy {
    pub fn new(accepted: Vec<i32>) -> Self {
        Self { accepted }
    }

    /// True if `status` is a valid completion under this policy.
    pub fn accepts(&self, status: &ExitStatus) -> bool {
        status.success() || status.code().is_some_and(|code| self.accepted.contains(&code))
    }
}

impl Default for ExitPolicy {
    fn default() -> Self {
        Self::new(vec![10, 20])
    }
}
