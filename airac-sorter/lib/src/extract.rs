//! Aggregation of classified entries into AIRAC, category and contributor
//! groupings.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{ChangelogError, Result};
use crate::patterns::{airac_message, contributor_name, cycle_number, split_category};

/// Messages grouped by AIRAC cycle, newest cycle first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiracGroup {
    messages: HashMap<String, Vec<String>>,
    /// Parsed cycle alongside its original key, sorted descending.
    order: Vec<(u32, String)>,
}

impl AiracGroup {
    /// Builds a group from a cycle → messages map.
    ///
    /// ## Errors
    ///
    /// Returns [`ChangelogError::InvalidCycle`] if any key is not a number.
    pub fn from_map(messages: HashMap<String, Vec<String>>) -> Result<Self> {
        let mut order = messages
            .keys()
            .map(|key| {
                key.parse::<u32>()
                    .map(|cycle| (cycle, key.clone()))
                    .map_err(|_| ChangelogError::InvalidCycle(key.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        order.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(Self { messages, order })
    }

    /// Cycle numbers, strictly descending.
    pub fn cycles(&self) -> Vec<u32> {
        self.order.iter().map(|(cycle, _)| *cycle).collect()
    }

    /// Messages recorded under a cycle key such as `"2207"`.
    pub fn get(&self, cycle: &str) -> Option<&[String]> {
        self.messages.get(cycle).map(Vec::as_slice)
    }

    /// Iterates `(cycle key, messages)` newest cycle first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order.iter().map(|(_, key)| {
            let messages = self.messages.get(key).map(Vec::as_slice).unwrap_or(&[]);
            (key.as_str(), messages)
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Messages grouped by free-text category, in first-seen category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherGroup {
    messages: HashMap<String, Vec<String>>,
    categories: Vec<String>,
}

impl OtherGroup {
    /// Appends a message to a category, registering the category on first use.
    pub fn push(&mut self, category: &str, message: &str) {
        match self.messages.get_mut(category) {
            Some(messages) => messages.push(message.to_string()),
            None => {
                self.categories.push(category.to_string());
                self.messages
                    .insert(category.to_string(), vec![message.to_string()]);
            }
        }
    }

    /// Category labels in the order they first appeared.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.messages.get(category).map(Vec::as_slice)
    }

    /// Iterates `(category, messages)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories.iter().map(|category| {
            let messages = self
                .messages
                .get(category)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            (category.as_str(), messages)
        })
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Groups AIRAC entries by cycle.
///
/// Entries without a `- ` separator are logged and skipped; they never abort
/// the run.
///
/// ## Errors
///
/// Returns [`ChangelogError::InvalidCycle`] if a grouping key is not numeric,
/// which means a non-AIRAC entry reached this stage.
pub fn group_airacs(entries: &[String]) -> Result<AiracGroup> {
    let mut messages: HashMap<String, Vec<String>> = HashMap::new();

    for entry in entries {
        let Some(message) = airac_message(entry) else {
            warn!(entry = %entry, "malformed message string in AIRAC entry, skipping");
            continue;
        };
        let cycle = cycle_number(entry).unwrap_or_default();

        messages
            .entry(cycle.to_string())
            .or_default()
            .push(message.to_string());
    }

    let group = AiracGroup::from_map(messages)?;
    debug!(cycles = ?group.cycles(), "grouped AIRAC changes");
    Ok(group)
}

/// Groups non-AIRAC entries by their category label.
pub fn group_other(entries: &[String]) -> OtherGroup {
    let mut group = OtherGroup::default();

    for entry in entries {
        let (category, message) = split_category(entry);
        group.push(category, message);
    }

    debug!(categories = group.len(), "grouped other changes");
    group
}

/// Collects credited contributors, first occurrence wins.
///
/// Expects the raw change entries with attribution clauses still attached.
pub fn collect_contributors(changes: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut contributors = Vec::new();

    for change in changes {
        if let Some(name) = contributor_name(change)
            && seen.insert(name)
        {
            contributors.push(name.to_string());
        }
    }

    debug!(contributors = contributors.len(), "collected contributors");
    contributors
}
