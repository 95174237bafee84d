//! Initial allocation and manual reassignment.
//!
//! The initial allocation is a first-fit greedy pass: colonists are served
//! in registration order and each takes the most preferred resource nobody
//! has claimed yet. The result is always a bijection for a complete
//! document, but it is neither optimal nor envy-free.
//!
//! Logging levels:
//! - **INFO**: Allocation computed, swap applied
//! - **DEBUG**: Individual assignments

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{ColonistId, Document, ResourceId};

/// The document cannot seed an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("colonist count ({colonists}) differs from resource count ({resources})")]
    CountMismatch { colonists: usize, resources: usize },

    #[error("colonist '{0}' has no preference list")]
    MissingPreferences(ColonistId),

    #[error("preference list of colonist '{0}' does not rank every resource exactly once")]
    IncompletePreferences(ColonistId),
}

/// A swap request was rejected. The allocation is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("colonist '{0}' does not exist")]
    UnknownColonist(String),

    #[error("colonist '{0}' has no assigned resource")]
    Unassigned(ColonistId),
}

/// Current assignment of resources to colonists.
///
/// Holds the colonist roster in registration order so that iteration and
/// display follow declaration order regardless of hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    colonists: Vec<ColonistId>,
    assignments: HashMap<ColonistId, ResourceId>,
}

impl Allocation {
    /// Creates an allocation where nobody holds a resource yet.
    pub fn unassigned(colonists: Vec<ColonistId>) -> Self {
        Self {
            colonists,
            assignments: HashMap::new(),
        }
    }

    /// Builds an allocation from explicit pairs without checking that it is
    /// a bijection. Pairs naming a colonist outside the roster are ignored.
    pub fn from_pairs<I>(colonists: Vec<ColonistId>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (ColonistId, ResourceId)>,
    {
        let mut allocation = Self::unassigned(colonists);
        for (colonist, resource) in pairs {
            if allocation.is_known(colonist.as_str()) {
                allocation.assignments.insert(colonist, resource);
            }
        }
        allocation
    }

    /// Resource currently held by `colonist`.
    pub fn resource_of(&self, colonist: &str) -> Option<&ResourceId> {
        self.assignments.get(colonist)
    }

    pub fn is_known(&self, colonist: &str) -> bool {
        self.colonists.iter().any(|c| c == colonist)
    }

    /// Colonists in registration order.
    pub fn colonists(&self) -> &[ColonistId] {
        &self.colonists
    }

    /// Colonists with their resource, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColonistId, Option<&ResourceId>)> {
        self.colonists
            .iter()
            .map(|c| (c, self.assignments.get(c.as_str())))
    }

    /// Number of colonists holding a resource.
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if every colonist holds a resource and no resource is
    /// held twice.
    pub fn is_complete(&self) -> bool {
        let distinct: HashSet<&ResourceId> = self.assignments.values().collect();
        self.assignments.len() == self.colonists.len() && distinct.len() == self.colonists.len()
    }

    /// Removes the resource held by `colonist` and returns it.
    pub fn unassign(&mut self, colonist: &str) -> Option<ResourceId> {
        self.assignments.remove(colonist)
    }

    /// Exchanges the resources of `a` and `b`.
    ///
    /// No preference or conflict check is made. Swapping a colonist with
    /// itself is a no-op.
    ///
    /// # Errors
    ///
    /// Fails without modifying the allocation if either colonist is unknown
    /// or holds no resource.
    pub fn swap(&mut self, a: &str, b: &str) -> Result<(), SwapError> {
        for name in [a, b] {
            if !self.is_known(name) {
                return Err(SwapError::UnknownColonist(name.to_string()));
            }
            if !self.assignments.contains_key(name) {
                return Err(SwapError::Unassigned(ColonistId::from(name)));
            }
        }
        if a == b {
            return Ok(());
        }

        let (left, left_resource) = self
            .assignments
            .remove_entry(a)
            .ok_or_else(|| SwapError::Unassigned(ColonistId::from(a)))?;
        let Some((right, right_resource)) = self.assignments.remove_entry(b) else {
            self.assignments.insert(left, left_resource);
            return Err(SwapError::Unassigned(ColonistId::from(b)));
        };

        info!(
            event = "swap",
            left = %left,
            right = %right,
            left_resource = %right_resource,
            right_resource = %left_resource,
        );

        self.assignments.insert(left, right_resource);
        self.assignments.insert(right, left_resource);
        Ok(())
    }
}

/// Computes the greedy first-fit allocation of `document`.
///
/// Deterministic: the same document always yields the same allocation.
///
/// # Errors
///
/// Fails if colonist and resource counts differ or if some colonist's
/// preference list is missing or not a permutation of the resources.
pub fn compute_initial_allocation(document: &Document) -> Result<Allocation, AllocationError> {
    let colonists = document.colonists();
    let resources = document.resources();
    if colonists.len() != resources.len() {
        return Err(AllocationError::CountMismatch {
            colonists: colonists.len(),
            resources: resources.len(),
        });
    }

    let mut lists = Vec::with_capacity(colonists.len());
    for colonist in colonists {
        let list = document
            .preferences_of(colonist.as_str())
            .ok_or_else(|| AllocationError::MissingPreferences(colonist.clone()))?;
        if !list.is_permutation_of(resources) {
            return Err(AllocationError::IncompletePreferences(colonist.clone()));
        }
        lists.push((colonist, list));
    }

    let mut claimed: HashSet<&ResourceId> = HashSet::with_capacity(resources.len());
    let mut allocation = Allocation::unassigned(colonists.to_vec());
    for (colonist, list) in lists {
        let resource = list
            .iter()
            .find(|r| !claimed.contains(r))
            .ok_or_else(|| AllocationError::IncompletePreferences(colonist.clone()))?;
        claimed.insert(resource);

        debug!(
            event = "assign",
            colonist = %colonist,
            resource = %resource,
            rank = list.rank(resource.as_str()).unwrap_or(0) as u64,
        );
        allocation
            .assignments
            .insert(colonist.clone(), resource.clone());
    }

    info!(
        event = "allocation_computed",
        colonists = allocation.assigned_count() as u64,
    );
    Ok(allocation)
}

/// Exchanges the resources of two colonists in `allocation`.
///
/// See [`Allocation::swap`].
pub fn swap(allocation: &mut Allocation, a: &str, b: &str) -> Result<(), SwapError> {
    allocation.swap(a, b)
}
