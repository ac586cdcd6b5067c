//! Named extraction functions over single changelog lines.
//!
//! Every regex the pipeline relies on lives here, compiled once through
//! [`LazyLock`]. Each function documents the line shape it expects and the
//! shape of what it hands back, so the matching rules can be tested apart
//! from the aggregation in [`crate::extract`].

use std::sync::LazyLock;

use regex::Regex;

/// One or two leading digits, a period and a whitespace character (`12. `).
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\.\s").expect("numbered item pattern"));

/// `AIRAC (2207)` anywhere in the line.
static AIRAC_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AIRAC \(\d{4}\)").expect("AIRAC heading pattern"));

/// First run of four digits.
static CYCLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("cycle number pattern"));

/// Everything after the first `- ` separator.
static AIRAC_MESSAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s([\s\S]*)").expect("AIRAC message pattern"));

/// Trailing ` - thanks to ...` clause, up to the end of the line.
static ATTRIBUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s-\sthanks\sto\s[^\n]*$").expect("attribution pattern"));

/// `- thanks to @handle (Name)`, capturing only the name.
static CONTRIBUTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-\sthanks\sto\s@[A-Za-z0-9-]+\s\(([A-Za-z]+\s?[A-Za-z]*)\)")
        .expect("contributor pattern")
});

/// Marker character that identifies a release heading.
const HEADING_MARKER: char = '#';

/// Returns true when the line demarcates a release section.
///
/// Any line containing `#` counts, not only lines starting with it.
pub fn is_heading(line: &str) -> bool {
    line.contains(HEADING_MARKER)
}

/// Strips the list numbering from a numbered change line.
///
/// Expects a raw document line. Returns the text after `N. ` / `NN. `, or
/// `None` when the line is not a numbered item.
///
/// ## Examples
///
/// ```
/// use airac_sorter_lib::patterns::strip_item_number;
///
/// assert_eq!(strip_item_number("12. Bug - Fixed"), Some("Bug - Fixed"));
/// assert_eq!(strip_item_number("fakeline"), None);
/// ```
pub fn strip_item_number(line: &str) -> Option<&str> {
    NUMBERED_ITEM.find(line).map(|m| &line[m.end()..])
}

/// Byte offset where the trailing attribution clause begins.
///
/// Returns `entry.len()` when the entry carries no attribution, so the
/// result can always be used to slice `entry[..offset]`.
pub fn attribution_start(entry: &str) -> usize {
    ATTRIBUTION
        .find(entry)
        .map(|m| m.start())
        .unwrap_or(entry.len())
}

/// Returns true when the entry carries an `AIRAC (NNNN)` tag.
pub fn is_airac_entry(entry: &str) -> bool {
    AIRAC_HEADING.is_match(entry)
}

/// First four-digit run in the entry, used as the cycle key.
///
/// For entries accepted by [`is_airac_entry`] this is always `Some`.
pub fn cycle_number(entry: &str) -> Option<&str> {
    CYCLE_NUMBER.find(entry).map(|m| m.as_str())
}

/// Message text following the first `- ` separator of an AIRAC entry.
///
/// Later separators are part of the message. Returns `None` when the entry
/// has no separator at all, which marks it as malformed.
///
/// ## Examples
///
/// ```
/// use airac_sorter_lib::patterns::airac_message;
///
/// assert_eq!(
///     airac_message("AIRAC (2207) - Updated Cranfield (EGTC) SMR"),
///     Some("Updated Cranfield (EGTC) SMR")
/// );
/// assert_eq!(airac_message("AIRAC (2205)"), None);
/// ```
pub fn airac_message(entry: &str) -> Option<&str> {
    AIRAC_MESSAGE
        .captures(entry)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Splits an entry into its category label and message.
///
/// The label is the text before the first `-`, trimmed. The message is the
/// text after it with a single leading space removed. An entry without a
/// separator becomes a label with an empty message.
pub fn split_category(entry: &str) -> (&str, &str) {
    match entry.split_once('-') {
        Some((category, message)) => (
            category.trim(),
            message.strip_prefix(' ').unwrap_or(message),
        ),
        None => (entry.trim(), ""),
    }
}

/// Contributor name from an untruncated change line.
///
/// Expects the line to still carry its attribution clause. Returns the
/// parenthesized name (one or two alphabetic words), or `None` when nobody
/// is credited.
pub fn contributor_name(entry: &str) -> Option<&str> {
    CONTRIBUTOR
        .captures(entry)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}
