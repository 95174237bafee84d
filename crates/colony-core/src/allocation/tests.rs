//! Tests for the greedy allocation and swaps.

use std::collections::HashSet;

use colony_test::facts::chain;
use colony_test::scenarios::{NAMED, SCENARIO_A, SCENARIO_C, TRIANGLE};

use super::*;
use crate::domain::{ConflictRegistry, EntityRegistry, PreferenceList, PreferenceTable};
use crate::parse_str;

fn held<'a>(allocation: &'a Allocation, colonist: &str) -> &'a str {
    allocation.resource_of(colonist).unwrap().as_str()
}

fn document(
    colonists: &[&str],
    resources: &[&str],
    preferences: &[(&str, &str)],
) -> Document {
    let mut registry = EntityRegistry::new();
    for c in colonists {
        registry.register_colonist(ColonistId::from(*c)).unwrap();
    }
    for r in resources {
        registry.register_resource(ResourceId::from(*r)).unwrap();
    }
    let mut table = PreferenceTable::new();
    for (c, ranked) in preferences {
        let list: PreferenceList = ranked.split_whitespace().map(ResourceId::from).collect();
        table.insert(ColonistId::from(*c), list);
    }
    Document::from_parts(registry, ConflictRegistry::new(), table)
}

#[test]
fn test_scenario_a_allocation() {
    let document = parse_str(SCENARIO_A).unwrap();
    let allocation = compute_initial_allocation(&document).unwrap();

    assert_eq!(held(&allocation, "A"), "2");
    assert_eq!(held(&allocation, "B"), "1");
    assert_eq!(held(&allocation, "C"), "3");
}

#[test]
fn test_registration_order_wins_ties() {
    let document = parse_str(SCENARIO_C).unwrap();
    let allocation = compute_initial_allocation(&document).unwrap();

    assert_eq!(held(&allocation, "A"), "1");
    assert_eq!(held(&allocation, "B"), "2");
}

#[test]
fn test_allocation_is_a_bijection() {
    let chained = chain(12).render();
    for text in [SCENARIO_A, SCENARIO_C, TRIANGLE, NAMED, chained.as_str()] {
        let document = parse_str(text).unwrap();
        let allocation = compute_initial_allocation(&document).unwrap();

        assert!(allocation.is_complete());
        let used: HashSet<&str> = allocation
            .iter()
            .map(|(_, r)| r.unwrap().as_str())
            .collect();
        assert_eq!(used.len(), document.resources().len());
        assert_eq!(allocation.assigned_count(), document.colonists().len());
    }
}

#[test]
fn test_allocation_is_deterministic() {
    let document = parse_str(&chain(10).render()).unwrap();
    let first = compute_initial_allocation(&document).unwrap();
    for _ in 0..5 {
        assert_eq!(compute_initial_allocation(&document).unwrap(), first);
    }
}

#[test]
fn test_iteration_follows_registration_order() {
    let document = parse_str(SCENARIO_A).unwrap();
    let allocation = compute_initial_allocation(&document).unwrap();

    let order: Vec<&str> = allocation.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(order, ["A", "B", "C"]);
}

#[test]
fn test_count_mismatch_is_an_error() {
    let document = document(&["A", "B"], &["1"], &[("A", "1"), ("B", "1")]);
    assert_eq!(
        compute_initial_allocation(&document),
        Err(AllocationError::CountMismatch {
            colonists: 2,
            resources: 1,
        })
    );
}

#[test]
fn test_missing_preferences_is_an_error() {
    let document = document(&["A", "B"], &["1", "2"], &[("A", "1 2")]);
    assert_eq!(
        compute_initial_allocation(&document),
        Err(AllocationError::MissingPreferences(ColonistId::from("B")))
    );
}

#[test]
fn test_partial_preferences_are_an_error() {
    let document = document(
        &["A", "B"],
        &["1", "2"],
        &[("A", "1 2"), ("B", "2 2")],
    );
    assert_eq!(
        compute_initial_allocation(&document),
        Err(AllocationError::IncompletePreferences(ColonistId::from("B")))
    );
}

// ============================================================================
// Swaps
// ============================================================================

#[test]
fn test_swap_exchanges_resources() {
    let document = parse_str(SCENARIO_A).unwrap();
    let mut allocation = compute_initial_allocation(&document).unwrap();

    swap(&mut allocation, "A", "C").unwrap();
    assert_eq!(held(&allocation, "A"), "3");
    assert_eq!(held(&allocation, "C"), "2");
    assert_eq!(held(&allocation, "B"), "1");
    assert!(allocation.is_complete());
}

#[test]
fn test_swap_twice_restores_allocation() {
    let document = parse_str(&chain(6).render()).unwrap();
    let original = compute_initial_allocation(&document).unwrap();

    let names: Vec<String> = document.colonists().iter().map(|c| c.to_string()).collect();
    for x in &names {
        for y in &names {
            if x == y {
                continue;
            }
            let mut allocation = original.clone();
            allocation.swap(x, y).unwrap();
            assert_ne!(allocation, original);
            allocation.swap(x, y).unwrap();
            assert_eq!(allocation, original);
        }
    }
}

#[test]
fn test_swap_with_self_is_noop() {
    let document = parse_str(SCENARIO_A).unwrap();
    let mut allocation = compute_initial_allocation(&document).unwrap();
    let before = allocation.clone();

    allocation.swap("B", "B").unwrap();
    assert_eq!(allocation, before);
}

#[test]
fn test_swap_with_unassigned_colonist_leaves_allocation_unchanged() {
    let document = parse_str(SCENARIO_A).unwrap();
    let mut allocation = compute_initial_allocation(&document).unwrap();
    allocation.unassign("C");
    let before = allocation.clone();

    assert_eq!(
        allocation.swap("A", "C"),
        Err(SwapError::Unassigned(ColonistId::from("C")))
    );
    assert_eq!(
        allocation.swap("C", "A"),
        Err(SwapError::Unassigned(ColonistId::from("C")))
    );
    assert_eq!(allocation, before);
}

#[test]
fn test_swap_with_unknown_colonist() {
    let document = parse_str(SCENARIO_A).unwrap();
    let mut allocation = compute_initial_allocation(&document).unwrap();
    let before = allocation.clone();

    assert_eq!(
        allocation.swap("A", "Z"),
        Err(SwapError::UnknownColonist("Z".to_string()))
    );
    assert_eq!(allocation, before);
}

#[test]
fn test_from_pairs_ignores_strangers() {
    let allocation = Allocation::from_pairs(
        vec![ColonistId::from("A")],
        [
            (ColonistId::from("A"), ResourceId::from("1")),
            (ColonistId::from("Z"), ResourceId::from("2")),
        ],
    );
    assert_eq!(allocation.assigned_count(), 1);
    assert!(allocation.resource_of("Z").is_none());
}
