use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while counting the characters of a file
#[derive(Error, Debug)]
pub enum CountError {
    #[error("Error: File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    /// Any other failure to open, read or decode the file
    #[error("Error reading file: {source}")]
    IoOrDecode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CountError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CountError::NotFound {
                path: path.to_path_buf(),
            },
            _ => CountError::IoOrDecode {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            CountError::NotFound { path } | CountError::IoOrDecode { path, .. } => path,
        }
    }
}

/// The command line did not consist of exactly one file path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Usage: {program} <file_path>")]
pub struct UsageError {
    pub program: String,
}
