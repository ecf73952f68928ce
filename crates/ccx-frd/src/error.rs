//! Error types for ccx-frd

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrdError>;

#[derive(Error, Debug)]
pub enum FrdError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset {name} opened at line {line} is never closed by a -3 record")]
    UnclosedBlock { name: String, line: usize },

    #[error("line {line}: -4 record without a dataset name")]
    MissingDatasetName { line: usize },

    #[error("dataset {name} contains no -1 data rows")]
    NoDataRows { name: String },

    #[error("dataset {name}, line {line}: invalid node id {text:?}")]
    InvalidNodeId {
        name: String,
        line: usize,
        text: String,
    },

    #[error("dataset {name}, line {line}, column {column}: invalid value {text:?}")]
    InvalidValue {
        name: String,
        line: usize,
        column: usize,
        text: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("postcard error: {0}")]
    Postcard(#[from] postcard::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid binary result file: {0}")]
    InvalidBinary(String),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<FrdError>,
    },
}

impl FrdError {
    /// Attach the name of the file being processed.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            err @ (FrdError::File { .. } | FrdError::Read { .. }) => err,
            err => FrdError::File {
                path: path.into(),
                source: Box::new(err),
            },
        }
    }
}
