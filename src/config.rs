use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::errors::SatbenchError;

// Defaults mirror the corpus this harness is usually pointed at.
const DEFAULT_SOLVER: &str = "minisat";
const DEFAULT_INSTANCE_DIR: &str = "2007SATindustrial";
const DEFAULT_RESULTS_PATH: &str = "measurements/2007SATindustrial_minisat.data";
const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Everything one benchmark run needs to know.
///
/// Built from defaults plus an optional TOML override file; nothing here is
/// settable through command-line flags.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Solver binary to benchmark.
    pub solver: PathBuf,
    /// Directory of instance files; every direct entry is treated as an input.
    pub instance_dir: PathBuf,
    /// Where the sorted measurements land (created/truncated per run).
    pub results_path: PathBuf,
    /// Wall-clock budget per instance.
    pub timeout: Duration,
    /// Non-zero exit codes that still count as a valid solver result.
    pub accepted_exit_codes: Vec<i32>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            solver: PathBuf::from(DEFAULT_SOLVER),
            instance_dir: PathBuf::from(DEFAULT_INSTANCE_DIR),
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            accepted_exit_codes: vec![10, 20],
        }
    }
}

/// On-disk representation. Every field is optional so a config file can
/// override just the parts it cares about.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    solver: Option<PathBuf>,
    instance_dir: Option<PathBuf>,
    results_path: Option<PathBuf>,
    timeout_ms: Option<u64>,
    accepted_exit_codes: Option<Vec<i32>>,
}

impl BenchConfig {
    /// Load configuration. An explicit path wins; otherwise `./satbench.toml`
    /// is tried, then `<config dir>/satbench/config.toml`, then the built-in
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = Path::new("satbench.toml");
        if local.is_file() {
            return Self::from_file(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global = config_dir.join("satbench").join("config.toml");
            if global.is_file() {
                return Self::from_file(&global);
            }
        }

        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SatbenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile =
            toml::from_str(&raw).map_err(|err| SatbenchError::ConfigParse {
                path: path.to_path_buf(),
                detail: err.to_string(),
            })?;

        let defaults = Self::default();
        Ok(Self {
            solver: file.solver.unwrap_or(defaults.solver),
            instance_dir: file.instance_dir.unwrap_or(defaults.instance_dir),
            results_path: file.results_path.unwrap_or(defaults.results_path),
            timeout: file
                .timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            accepted_exit_codes: file
                .accepted_exit_codes
                .unwrap_or(defaults.accepted_exit_codes),
        })
    }
}
