//! Unordered rivalry relation between colonists.

use std::collections::BTreeSet;

use super::ids::ColonistId;

/// An unordered pair of distinct colonists.
///
/// The endpoints are stored in canonical order so `{A, B}` and `{B, A}`
/// compare and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictPair {
    low: ColonistId,
    high: ColonistId,
}

impl ConflictPair {
    /// Creates a pair, or `None` when both endpoints are the same colonist.
    pub fn new(a: ColonistId, b: ColonistId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Endpoints in canonical order.
    pub fn endpoints(&self) -> (&ColonistId, &ColonistId) {
        (&self.low, &self.high)
    }

    pub fn involves(&self, colonist: &str) -> bool {
        self.low == *colonist || self.high == *colonist
    }

    /// Returns the endpoint opposite to `colonist`, if `colonist` is part of the pair.
    pub fn other(&self, colonist: &str) -> Option<&ColonistId> {
        if self.low == *colonist {
            Some(&self.high)
        } else if self.high == *colonist {
            Some(&self.low)
        } else {
            None
        }
    }
}

/// Set of conflict pairs.
///
/// Endpoint registration is checked by the callers that own the entity
/// registry; this type only enforces set semantics.
#[derive(Debug, Clone, Default)]
pub struct ConflictRegistry {
    pairs: BTreeSet<ConflictPair>,
}

impl ConflictRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair. Returns false if the pair was already present.
    pub fn insert(&mut self, pair: ConflictPair) -> bool {
        self.pairs.insert(pair)
    }

    /// Returns true if `a` and `b` are registered rivals, in either order.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        match ConflictPair::new(ColonistId::from(a), ColonistId::from(b)) {
            Some(pair) => self.pairs.contains(&pair),
            None => false,
        }
    }

    /// Rivals of `colonist`, in canonical pair order.
    pub fn rivals_of<'a>(&'a self, colonist: &'a str) -> impl Iterator<Item = &'a ColonistId> + 'a {
        self.pairs.iter().filter_map(move |pair| pair.other(colonist))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConflictPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
