use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtmosError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type AtmosResult<T> = Result<T, AtmosError>;
