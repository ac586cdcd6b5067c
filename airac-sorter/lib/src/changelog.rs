//! The assembled result of one sorting run.

use tracing::debug;

use crate::classify::classify;
use crate::error::Result;
use crate::extract::{AiracGroup, OtherGroup, collect_contributors, group_airacs, group_other};
use crate::scanner::scan_changes;

/// Change entries of the newest release, regrouped for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    /// Numbered change lines as scanned, attribution still attached.
    pub changes: Vec<String>,
    /// AIRAC-tagged messages by cycle.
    pub airacs: AiracGroup,
    /// Remaining messages by category.
    pub other: OtherGroup,
    /// Credited contributors in first-seen order.
    pub contributors: Vec<String>,
}

impl Changelog {
    /// Runs the full extraction pipeline over a changelog document.
    ///
    /// ## Errors
    ///
    /// Returns [`ChangelogError::InvalidCycle`](crate::ChangelogError::InvalidCycle)
    /// if an AIRAC grouping key cannot be read as a number.
    ///
    /// ## Examples
    ///
    /// ```
    /// use airac_sorter_lib::Changelog;
    ///
    /// let doc = "# Release\n1. AIRAC (2207) - Updated SMR - thanks to @jd (John Doe)\n";
    /// let changelog = Changelog::parse(doc).unwrap();
    ///
    /// assert_eq!(changelog.airacs.cycles(), vec![2207]);
    /// assert_eq!(changelog.contributors, vec!["John Doe".to_string()]);
    /// ```
    pub fn parse(document: &str) -> Result<Self> {
        let changes = scan_changes(document);
        let classified = classify(&changes);
        let airacs = group_airacs(&classified.airac)?;
        let other = group_other(&classified.other);
        let contributors = collect_contributors(&changes);

        debug!(
            changes = changes.len(),
            cycles = airacs.len(),
            categories = other.len(),
            contributors = contributors.len(),
            "parsed changelog"
        );

        Ok(Self {
            changes,
            airacs,
            other,
            contributors,
        })
    }

    /// Parses raw document bytes, replacing invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(&String::from_utf8_lossy(bytes))
    }
}
