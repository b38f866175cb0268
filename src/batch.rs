use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::config::BenchConfig;
use crate::display;
use crate::errors::SatbenchError;
use crate::runner;
use crate::types::{AttemptRecord, ExitPolicy};

/// Everything a run produced: the per-file outcome records plus the sorted
/// successful durations (seconds) that were written to disk.
#[derive(Debug)]
pub struct BatchReport {
    pub records: Vec<AttemptRecord>,
    pub durations: Vec<f64>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}

/// Run every entry of the instance directory through the timed runner,
/// strictly one at a time, then persist the sorted durations.
///
/// An unreadable instance directory is fatal and aborts before any solver is
/// spawned. Individual attempts never abort the batch — their outcome is
/// recorded and the loop moves on.
pub async fn run(config: &BenchConfig) -> Result<BatchReport> {
    let entries =
        std::fs::read_dir(&config.instance_dir).map_err(|source| {
            SatbenchError::InstanceDirUnreadable {
                path: config.instance_dir.clone(),
                source,
            }
        })?;

    let policy = ExitPolicy::new(config.accepted_exit_codes.clone());
    let mut records = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();

        // Announce the instance before spawning, flushed, so the name shows
        // up ahead of whatever the child writes to the shared streams.
        print!("{}\t", display::progress_name(&file_name));
        let _ = std::io::stdout().flush();

        let outcome = runner::measure(&config.solver, &path, config.timeout, &policy).await;
        println!("{}", display::format_outcome(&outcome));

        records.push(AttemptRecord {
            file_name,
            path,
            outcome,
        });
    }

    let mut durations: Vec<f64> = records
        .iter()
        .filter_map(|r| r.outcome.duration())
        .map(|d| d.as_secs_f64())
        .collect();
    durations.sort_by(f64::total_cmp);

    write_results(&config.results_path, &durations)?;

    Ok(BatchReport { records, durations })
}

/// Write one duration per line, ascending. Failure to create the file is
/// fatal; a failed write of an individual line is reported and the remaining
/// lines are still attempted.
fn write_results(path: &Path, durations: &[f64]) -> Result<()> {
    let mut file = File::create(path).map_err(|source| SatbenchError::ResultsCreate {
        path: path.to_path_buf(),
        source,
    })?;

    for value in durations {
        if let Err(err) = writeln!(file, "{value}") {
            println!("Failed to write measurement {value}: {err}");
        }
    }

    Ok(())
}
