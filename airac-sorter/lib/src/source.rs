//! Loading the changelog document from disk or over HTTP.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Source;
use crate::error::{ChangelogError, Result};

/// HTTP timeout for fetching the remote changelog.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads a local changelog file.
///
/// ## Errors
///
/// Returns [`ChangelogError::Read`] if the file cannot be read.
pub fn read_changelog(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| ChangelogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Fetches a remote changelog with a single GET request.
///
/// Non-success status codes are errors. No retries are attempted.
///
/// ## Errors
///
/// Returns [`ChangelogError::Http`] on connection failure, an error status,
/// or a failed body read.
pub async fn fetch_changelog(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;

    let body = response.bytes().await?;
    debug!(bytes = body.len(), "fetched changelog");
    Ok(body.to_vec())
}

/// Loads the changelog from whichever source the run was configured with.
pub async fn load(source: &Source, client: &reqwest::Client) -> Result<Vec<u8>> {
    info!(%source, "reading changelog");
    match source {
        Source::File(path) => read_changelog(path),
        Source::Url(url) => fetch_changelog(client, url).await,
    }
}
