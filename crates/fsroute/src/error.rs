//! Fatal errors raised while building a route table.
//!
//! Resolution itself never fails: a request that matches nothing is a normal
//! not-found [`Resolution`](crate::Resolution). Only a table that cannot be read
//! at startup is an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read files list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("files list {path} is not a JSON array of paths: {source}")]
    FilesList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("routes root {0} does not exist")]
    MissingRoot(PathBuf),

    #[error("failed to walk routes root: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
