//! Splitting change entries into AIRAC and other groups.

use tracing::debug;

use crate::patterns::{attribution_start, is_airac_entry};

/// Change entries split by whether they carry an AIRAC tag.
///
/// Both lists hold entries with their attribution clause removed, in the
/// order they appeared in the changelog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedChanges {
    /// Entries tagged `AIRAC (NNNN)`.
    pub airac: Vec<String>,
    /// Everything else.
    pub other: Vec<String>,
}

/// Removes the trailing ` - thanks to ...` clause from an entry.
pub fn strip_attribution(entry: &str) -> &str {
    &entry[..attribution_start(entry)]
}

/// Classifies every change entry into exactly one group.
pub fn classify(changes: &[String]) -> ClassifiedChanges {
    let mut classified = ClassifiedChanges::default();

    for change in changes {
        let entry = strip_attribution(change);
        if is_airac_entry(entry) {
            classified.airac.push(entry.to_string());
        } else {
            classified.other.push(entry.to_string());
        }
    }

    debug!(
        airac = classified.airac.len(),
        other = classified.other.len(),
        "classified changes"
    );
    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes() -> Vec<String> {
        [
            "Bug - Corrected Alderney (EGJA) runway coords - thanks to @sdkjsdklfj (John Doe)",
            "AIRAC (2207) - Updated Cranfield (EGTC) SMR - thanks to @sdfsdf (Doe John)",
            "AIRAC (2207) - Updated Inverness (EGPE) RWYs 05/23 and 11/29 coords - this was very silly - thanks to @sdfsdf (Smith)",
            "Enhancement - Added missing heli points and holds to Gloucestershire (EGBJ) SMR",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    #[test]
    fn splits_and_strips_attribution() {
        let classified = classify(&changes());

        assert_eq!(
            classified.airac,
            vec![
                "AIRAC (2207) - Updated Cranfield (EGTC) SMR",
                "AIRAC (2207) - Updated Inverness (EGPE) RWYs 05/23 and 11/29 coords - this was very silly",
            ]
        );
        assert_eq!(
            classified.other,
            vec![
                "Bug - Corrected Alderney (EGJA) runway coords",
                "Enhancement - Added missing heli points and holds to Gloucestershire (EGBJ) SMR",
            ]
        );
    }

    #[test]
    fn every_entry_lands_in_exactly_one_group() {
        let input = changes();
        let classified = classify(&input);

        assert_eq!(classified.airac.len() + classified.other.len(), input.len());
        assert!(classified.airac.iter().all(|e| is_airac_entry(e)));
        assert!(classified.other.iter().all(|e| !is_airac_entry(e)));
    }

    #[test]
    fn airac_tag_only_inside_attribution_is_other() {
        let input = vec!["Bug - Fixed - thanks to @pilot (AIRAC (2207))".to_string()];
        let classified = classify(&input);

        assert!(classified.airac.is_empty());
        assert_eq!(classified.other, vec!["Bug - Fixed"]);
    }

    #[test]
    fn strip_attribution_without_clause_is_identity() {
        assert_eq!(strip_attribution("Bug - Fixed"), "Bug - Fixed");
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    fn change_entry() -> impl Strategy<Value = String> {
        let body = prop_oneof![
            (0u32..10000, "[A-Za-z ]{1,20}")
                .prop_map(|(cycle, message)| format!("AIRAC ({cycle:04}) - {message}")),
            ("[A-Za-z]{1,12}", "[A-Za-z() ]{0,20}")
                .prop_map(|(category, message)| format!("{category} - {message}")),
        ];
        let attribution = prop::option::of(("[A-Za-z0-9-]{1,10}", "[A-Za-z]{1,8}( [A-Za-z]{1,8})?"))
            .prop_map(|credit| match credit {
                Some((handle, name)) => format!(" - thanks to @{handle} ({name})"),
                None => String::new(),
            });
        (body, attribution).prop_map(|(body, attribution)| format!("{body}{attribution}"))
    }

    proptest! {
        #[test]
        fn partitions_entries_by_airac_tag(
            entries in prop::collection::vec(change_entry(), 0..30)
        ) {
            let classified = classify(&entries);

            prop_assert_eq!(classified.airac.len() + classified.other.len(), entries.len());
            prop_assert!(classified.airac.iter().all(|e| is_airac_entry(e)));
            prop_assert!(classified.other.iter().all(|e| !is_airac_entry(e)));
            prop_assert!(
                classified
                    .airac
                    .iter()
                    .chain(&classified.other)
                    .all(|e| !e.contains(" - thanks to @"))
            );

            let expected_airac: Vec<String> = entries
                .iter()
                .map(String::as_str)
                .map(strip_attribution)
                .filter(|e| is_airac_entry(e))
                .map(String::from)
                .collect();
            prop_assert_eq!(classified.airac, expected_airac);
        }
    }
}
