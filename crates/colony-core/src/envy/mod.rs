//! Jealousy detection.
//!
//! A colonist `X` is jealous when some rival `Y` (a registered conflict
//! partner) holds a resource that `X` ranks strictly better than its own.
//! Only `X`'s own ranking matters; `Y`'s preferences are never consulted.
//!
//! A resource absent from `X`'s list counts as the worst possible rank, so
//! it can never be coveted. Complete documents never exercise that case.


use tracing::trace;

use crate::allocation::Allocation;
use crate::domain::{ColonistId, Document, PreferenceList, ResourceId};

/// A jealous colonist with the rival and resource that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Jealousy {
    pub colonist: ColonistId,
    pub holds: ResourceId,
    pub rival: ColonistId,
    pub covets: ResourceId,
}

/// Rank used for comparisons; unlisted resources sort after every listed one.
fn rank_or_worst(list: &PreferenceList, resource: &str) -> usize {
    list.rank(resource).unwrap_or(usize::MAX)
}

/// Finds the first rival, in conflict registry order, whose resource
/// `colonist` prefers over its own.
fn first_envied(
    colonist: &ColonistId,
    allocation: &Allocation,
    document: &Document,
) -> Option<Jealousy> {
    let own = allocation.resource_of(colonist.as_str())?;
    let list = document.preferences_of(colonist.as_str())?;
    let own_rank = list.rank(own.as_str())?;

    document
        .conflicts()
        .rivals_of(colonist.as_str())
        .find_map(|rival| {
            let theirs = allocation.resource_of(rival.as_str())?;
            let their_rank = rank_or_worst(list, theirs.as_str());
            trace!(
                event = "envy_check",
                colonist = %colonist,
                rival = %rival,
                own_rank = own_rank as u64,
                rival_rank = their_rank as u64,
            );
            (their_rank < own_rank).then(|| Jealousy {
                colonist: colonist.clone(),
                holds: own.clone(),
                rival: rival.clone(),
                covets: theirs.clone(),
            })
        })
}

/// Returns true if `colonist` prefers a rival's resource over its own.
///
/// Unassigned colonists, and colonists whose own resource is missing from
/// their list, are never jealous.
pub fn is_jealous(colonist: &str, allocation: &Allocation, document: &Document) -> bool {
    document
        .registry()
        .colonist(colonist)
        .is_some_and(|id| first_envied(id, allocation, document).is_some())
}

/// Jealous colonists in registration order.
pub fn enumerate_jealous(allocation: &Allocation, document: &Document) -> Vec<ColonistId> {
    jealousy_report(allocation, document)
        .into_iter()
        .map(|j| j.colonist)
        .collect()
}

/// One entry per jealous colonist, in registration order, naming the first
/// coveted rival.
pub fn jealousy_report(allocation: &Allocation, document: &Document) -> Vec<Jealousy> {
    document
        .colonists()
        .iter()
        .filter_map(|colonist| first_envied(colonist, allocation, document))
        .collect()
}
