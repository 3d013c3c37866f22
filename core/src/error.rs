use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("failed to read token file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid token file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to serialize colour dictionary: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TokenError>;
