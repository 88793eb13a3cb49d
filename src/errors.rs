use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartfixError {
    #[error("chartfix error: {0}")]
    Generic(String),
    #[error(transparent)]
    Expected(#[from] ChartfixExpectedError),
    #[error("MIDI error: {0}")]
    Midi(#[from] midly::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The rewrite failed after the original chart was already moved aside.
    /// The backup holds the only surviving copy and the original path is
    /// missing, which callers must report distinctly from a clean failure.
    #[error("failed to write repaired chart to {} after moving the original to {}: {source}", original.display(), backup.display())]
    StrandedWrite {
        original: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ChartfixExpectedError {
    #[error("{0}")]
    Generic(String),
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },
    #[error("missing {field} in {}", path.display())]
    MissingMetadata { path: PathBuf, field: String },
    #[error("unreadable chart {}: {reason}", path.display())]
    InvalidChart { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ChartfixError>;
