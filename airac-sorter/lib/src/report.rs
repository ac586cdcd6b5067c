//! Plain-text report rendering.
//!
//! The report has three sections, each opened by a `--- Name: ---` banner
//! and separated from the next by one blank line:
//!
//! ```text
//! --- AIRACs: ---
//! 2207:
//! Updated Cranfield (EGTC) SMR
//!
//! 2206:
//! Updated Inverness (EGPE) coords
//!
//! --- Other: ---
//! Bug:
//! Corrected Alderney (EGJA) runway coords
//!
//! --- Contributors: ---
//! John Doe
//! ```

use std::io::Write;

use crate::changelog::Changelog;
use crate::extract::{AiracGroup, OtherGroup};

const AIRAC_BANNER: &str = "--- AIRACs: ---";
const OTHER_BANNER: &str = "--- Other: ---";
const CONTRIBUTORS_BANNER: &str = "--- Contributors: ---";

/// Writes the full three-section report.
pub fn write_report<W: Write>(out: &mut W, changelog: &Changelog) -> std::io::Result<()> {
    write_airacs(out, &changelog.airacs)?;
    writeln!(out)?;
    write_other(out, &changelog.other)?;
    writeln!(out)?;
    write_contributors(out, &changelog.contributors)
}

/// Writes the AIRAC section, newest cycle first.
pub fn write_airacs<W: Write>(out: &mut W, airacs: &AiracGroup) -> std::io::Result<()> {
    write_blocks(out, AIRAC_BANNER, airacs.iter())
}

/// Writes the Other section in first-seen category order.
pub fn write_other<W: Write>(out: &mut W, other: &OtherGroup) -> std::io::Result<()> {
    write_blocks(out, OTHER_BANNER, other.iter())
}

/// Writes the contributor list, one name per line.
pub fn write_contributors<W: Write>(out: &mut W, contributors: &[String]) -> std::io::Result<()> {
    writeln!(out, "{CONTRIBUTORS_BANNER}")?;
    for name in contributors {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Banner followed by `heading:` blocks, blank line between blocks only.
fn write_blocks<'a, W: Write>(
    out: &mut W,
    banner: &str,
    blocks: impl Iterator<Item = (&'a str, &'a [String])>,
) -> std::io::Result<()> {
    writeln!(out, "{banner}")?;
    for (index, (heading, messages)) in blocks.enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{heading}:")?;
        for message in messages {
            writeln!(out, "{message}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn airacs() -> AiracGroup {
        let mut map = HashMap::new();
        map.insert(
            "2207".to_string(),
            vec!["Test 1".to_string(), "Test 2".to_string()],
        );
        map.insert(
            "2206".to_string(),
            vec![
                "Test 3".to_string(),
                "Test 4".to_string(),
                "Test 5".to_string(),
            ],
        );
        AiracGroup::from_map(map).expect("numeric cycles")
    }

    fn other() -> OtherGroup {
        let mut other = OtherGroup::default();
        other.push("Enhancement", "Deleted Luton");
        other.push("Bug", "Removed all Gatwick (EGKK) SIDs");
        other.push("Enhancement", "Added Biggin Hill");
        other
    }

    fn render(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).expect("write to buffer");
        String::from_utf8(buf).expect("utf-8 report")
    }

    #[test]
    fn airac_section_separates_cycles_without_trailing_blank() {
        let output = render(|buf| write_airacs(buf, &airacs()));

        assert_eq!(
            output,
            "--- AIRACs: ---\n2207:\nTest 1\nTest 2\n\n2206:\nTest 3\nTest 4\nTest 5\n"
        );
    }

    #[test]
    fn other_section_follows_first_seen_order() {
        let output = render(|buf| write_other(buf, &other()));

        assert_eq!(
            output,
            "--- Other: ---\nEnhancement:\nDeleted Luton\nAdded Biggin Hill\n\nBug:\nRemoved all Gatwick (EGKK) SIDs\n"
        );
    }

    #[test]
    fn contributors_section_lists_names() {
        let contributors = vec![
            "John Doe".to_string(),
            "Tim".to_string(),
            "Sam Smith".to_string(),
        ];
        let output = render(|buf| write_contributors(buf, &contributors));

        assert_eq!(output, "--- Contributors: ---\nJohn Doe\nTim\nSam Smith\n");
    }

    #[test]
    fn empty_sections_still_have_banners() {
        let output = render(|buf| write_report(buf, &Changelog::default()));

        assert_eq!(
            output,
            "--- AIRACs: ---\n\n--- Other: ---\n\n--- Contributors: ---\n"
        );
    }

    #[test]
    fn full_report_joins_sections_with_one_blank_line() {
        let changelog = Changelog {
            airacs: airacs(),
            other: other(),
            contributors: vec!["John Doe".to_string(), "Tim".to_string()],
            ..Changelog::default()
        };

        let output = render(|buf| write_report(buf, &changelog));

        let expected = "--- AIRACs: ---\n2207:\nTest 1\nTest 2\n\n2206:\nTest 3\nTest 4\nTest 5\n\
            \n\
            --- Other: ---\nEnhancement:\nDeleted Luton\nAdded Biggin Hill\n\nBug:\nRemoved all Gatwick (EGKK) SIDs\n\
            \n\
            --- Contributors: ---\nJohn Doe\nTim\n";
        assert_eq!(output, expected);
    }
}
