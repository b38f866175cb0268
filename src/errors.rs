use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SatbenchError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },

    #[error("Cannot read instance directory {path}: {source}")]
    InstanceDirUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create results file {path}: {source}")]
    ResultsCreate {
        path: PathBuf,
        source: std::io::Error,
    },
}
