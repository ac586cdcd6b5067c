//! Regroups a sector file changelog into an AIRAC-ordered report.
//!
//! Only the newest release section of the changelog is considered. Its
//! numbered change lines are split into AIRAC-tagged changes (grouped by
//! cycle, newest first), other changes (grouped by category) and the list of
//! credited contributors, then written out as a three-section text report.
//!
//! ## Pipeline
//!
//! - [`scan_changes`] - numbered lines up to the second heading
//! - [`classify()`] - AIRAC vs. other, attribution stripped
//! - [`group_airacs`], [`group_other`], [`collect_contributors`] - aggregation
//! - [`write_report`] - the text report
//!
//! [`Changelog::parse`] runs the extraction stages in order; [`run`] adds
//! loading the document and writing the report as described by a [`Config`].
//!
//! ## Examples
//!
//! ```
//! use airac_sorter_lib::{Changelog, write_report};
//!
//! let doc = "# Release\n1. AIRAC (2207) - Updated SMR\n2. Bug - Fixed holds\n";
//! let changelog = Changelog::parse(doc).unwrap();
//!
//! let mut out = Vec::new();
//! write_report(&mut out, &changelog).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("--- AIRACs: ---\n2207:\n"));
//! ```

mod changelog;
mod classify;
mod config;
mod error;
mod extract;
pub mod patterns;
mod report;
mod scanner;
mod source;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use tracing::info;

pub use changelog::Changelog;
pub use classify::{ClassifiedChanges, classify, strip_attribution};
pub use config::{
    Config, DEFAULT_CHANGELOG_URL, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, Output, Source,
};
pub use error::{ChangelogError, Result};
pub use extract::{AiracGroup, OtherGroup, collect_contributors, group_airacs, group_other};
pub use report::{write_airacs, write_contributors, write_other, write_report};
pub use scanner::{HEADING_LIMIT, scan_changes};
pub use source::{fetch_changelog, load, read_changelog};

/// Loads, sorts and reports one changelog.
///
/// ## Errors
///
/// Any failure to read or fetch the document, an invalid AIRAC cycle key,
/// or a failure to create or write the destination.
#[tracing::instrument(skip_all, fields(source = %config.source, output = %config.output))]
pub async fn run(config: &Config, client: &reqwest::Client) -> Result<Changelog> {
    let start = Instant::now();

    let bytes = load(&config.source, client).await?;
    let changelog = Changelog::from_bytes(&bytes)?;

    match &config.output {
        Output::File(path) => {
            let file = File::create(path).map_err(|source| ChangelogError::Create {
                path: path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, &changelog)?;
            writer.flush()?;
        }
        Output::Stdout => {
            let mut stdout = std::io::stdout().lock();
            write_report(&mut stdout, &changelog)?;
            stdout.flush()?;
        }
    }

    info!(elapsed = ?start.elapsed(), "report written");
    Ok(changelog)
}
