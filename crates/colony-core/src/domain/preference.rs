//! Ranked preference lists.

use std::collections::{HashMap, HashSet};

use super::ids::{ColonistId, ResourceId};

/// A colonist's ranking of resources, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PreferenceList(Vec<ResourceId>);

impl PreferenceList {
    pub fn new(resources: Vec<ResourceId>) -> Self {
        Self(resources)
    }

    /// Zero-based rank of `resource`, or `None` if the list does not mention it.
    pub fn rank(&self, resource: &str) -> Option<usize> {
        self.0.iter().position(|r| r == resource)
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.rank(resource).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ResourceId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the list ranks every resource in `resources` exactly once.
    pub fn is_permutation_of(&self, resources: &[ResourceId]) -> bool {
        if self.0.len() != resources.len() {
            return false;
        }
        let expected: HashSet<&str> = resources.iter().map(ResourceId::as_str).collect();
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0
            .iter()
            .all(|r| expected.contains(r.as_str()) && seen.insert(r.as_str()))
    }
}

impl FromIterator<ResourceId> for PreferenceList {
    fn from_iter<I: IntoIterator<Item = ResourceId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Preference lists keyed by colonist.
#[derive(Debug, Clone, Default)]
pub struct PreferenceTable {
    lists: HashMap<ColonistId, PreferenceList>,
}

impl PreferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a list for `colonist`. Returns false, leaving the table
    /// unchanged, if the colonist already has one.
    pub fn insert(&mut self, colonist: ColonistId, list: PreferenceList) -> bool {
        if self.lists.contains_key(&colonist) {
            return false;
        }
        self.lists.insert(colonist, list);
        true
    }

    pub fn get(&self, colonist: &str) -> Option<&PreferenceList> {
        self.lists.get(colonist)
    }

    pub fn contains(&self, colonist: &str) -> bool {
        self.lists.contains_key(colonist)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
