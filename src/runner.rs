use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;

use crate::types::{ExitPolicy, Outcome};

/// Run `<solver> <instance>` and wait up to `budget` for it to finish.
///
/// The child inherits stdout/stderr so solver chatter stays visible in the
/// terminal; nothing is captured or parsed. The clock starts once the spawn
/// has succeeded, and the wait races the budget — whichever resolves first
/// decides the outcome. A child still running when the budget elapses is
/// killed and reported as `Outcome::Timeout` with no duration.
pub async fn measure(
    solver: &Path,
    instance: &Path,
    budget: Duration,
    policy: &ExitPolicy,
) -> Outcome {
    let spawned = Command::new(solver)
        .arg(instance)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(err) => return Outcome::StartError(err.to_string()),
    };

    let started = Instant::now();

    match timeout(budget, child.wait()).await {
        Ok(Ok(status)) => {
            let elapsed = started.elapsed();
            if policy.accepts(&status) {
                Outcome::Success(elapsed)
            } else {
                Outcome::AbnormalExit(status.code())
            }
        }
        Ok(Err(err)) => Outcome::StartError(err.to_string()),
        Err(_) => {
            // kill() also reaps the child, so nothing is left behind.
            let _ = child.kill().await;
            Outcome::Timeout
        }
    }
}
