//! Per-group option selection for the product detail page.

use std::collections::BTreeMap;

/// The chosen option per variant group, at most one per group.
///
/// Backed by an ordered map so rebuilt query strings come out in a
/// deterministic group order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelection {
    chosen: BTreeMap<String, String>,
}

impl VariantSelection {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `option` for `group`, replacing any earlier choice for the
    /// same group. Choices for other groups are untouched.
    pub fn select(&mut self, group: impl Into<String>, option: impl Into<String>) {
        self.chosen.insert(group.into(), option.into());
    }

    /// The chosen option for `group`, if any.
    #[must_use]
    pub fn chosen(&self, group: &str) -> Option<&str> {
        self.chosen.get(group).map(String::as_str)
    }

    /// Whether `option` is the current choice for `group`.
    #[must_use]
    pub fn is_chosen(&self, group: &str, option: &str) -> bool {
        self.chosen(group) == Some(option)
    }

    /// Iterate over `(group, option)` pairs in group-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chosen
            .iter()
            .map(|(group, option)| (group.as_str(), option.as_str()))
    }

    /// Number of groups with a choice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Whether no group has a choice yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}
