//! Extraction of numbered change lines from the newest release section.

use tracing::debug;

use crate::patterns::{is_heading, strip_item_number};

/// Number of headings after which scanning stops.
///
/// A changelog lists releases newest first, so the second heading marks the
/// start of the previous release.
pub const HEADING_LIMIT: usize = 2;

/// Collects the change entries of the newest release.
///
/// Lines are read until [`HEADING_LIMIT`] headings have been seen. Numbered
/// lines (`N. text`) have their numbering stripped and are returned in
/// document order; every other line is ignored. A document with fewer
/// headings is scanned to the end.
///
/// Any line containing `#` counts as a heading, including a numbered change
/// such as `2. Bug - see PR #12`. That line is dropped and uses up one of the
/// two headings, so entries after it may be cut off.
///
/// ## Examples
///
/// ```
/// use airac_sorter_lib::scan_changes;
///
/// let doc = "# 2022/07\n1. Bug - Fixed\nnotes\n# 2022/06\n1. Bug - Old\n";
/// assert_eq!(scan_changes(doc), vec!["Bug - Fixed".to_string()]);
/// ```
pub fn scan_changes(document: &str) -> Vec<String> {
    let mut headings = 0;
    let mut changes = Vec::new();

    for line in document.lines() {
        if is_heading(line) {
            headings += 1;
            if headings >= HEADING_LIMIT {
                break;
            }
            continue;
        }

        if let Some(change) = strip_item_number(line) {
            changes.push(change.to_string());
        }
    }

    debug!(headings, changes = changes.len(), "scanned changelog");
    changes
}
