use std::{io, path::PathBuf};

use thiserror::Error;

/// I/O failure while rewriting a single descriptor file.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Structural traversal failure. Always fatal for the run.
#[derive(Debug, Error)]
pub enum TraverseError {
    #[error("{} must be a directory", .0.display())]
    InvalidArgument(PathBuf),
    #[error("failed to list directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
