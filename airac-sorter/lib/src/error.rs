//! Error types for the changelog sorter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a sorting run.
///
/// Malformed AIRAC entries are not represented here; they are logged and
/// skipped by [`group_airacs`](crate::group_airacs).
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// The local changelog file could not be read.
    #[error("unable to read changelog from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fetching the remote changelog failed (connection, status or body).
    #[error("failed to fetch changelog: {0}")]
    Http(#[from] reqwest::Error),

    /// An AIRAC grouping key was not a number.
    #[error("unable to convert AIRAC cycle '{0}' to a number")]
    InvalidCycle(String),

    /// The report destination could not be created.
    #[error("could not create output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written to its destination.
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Convenience Result type for changelog operations.
pub type Result<T> = std::result::Result<T, ChangelogError>;
