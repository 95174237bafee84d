//! Section state machine for the colony fact format.
//!
//! Facts must appear in the order `colon`, `ressource`, `deteste`,
//! `preferences`. A fact is accepted in the current section or in the one
//! immediately after it; every allowed move is listed in [`TRANSITIONS`]
//! together with the guard that must hold before it is taken.

use std::fmt;

/// Section the parser is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// No fact read yet.
    #[default]
    Start,
    Colon,
    Ressource,
    Deteste,
    Preferences,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Start => "start",
            Section::Colon => "colon",
            Section::Ressource => "ressource",
            Section::Deteste => "deteste",
            Section::Preferences => "preferences",
        };
        f.write_str(name)
    }
}

/// Condition checked before a transition is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Guard {
    Always,
    /// At least one colonist has been defined.
    HasColonists,
    /// Colonist and resource counts are equal.
    CountsMatch,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: Section,
    to: Section,
    guard: Guard,
}

const fn edge(from: Section, to: Section, guard: Guard) -> Transition {
    Transition { from, to, guard }
}

const TRANSITIONS: [Transition; 8] = [
    edge(Section::Start, Section::Colon, Guard::Always),
    edge(Section::Colon, Section::Colon, Guard::Always),
    edge(Section::Colon, Section::Ressource, Guard::HasColonists),
    edge(Section::Ressource, Section::Ressource, Guard::HasColonists),
    edge(Section::Ressource, Section::Deteste, Guard::CountsMatch),
    edge(Section::Deteste, Section::Deteste, Guard::Always),
    edge(Section::Deteste, Section::Preferences, Guard::CountsMatch),
    edge(Section::Preferences, Section::Preferences, Guard::Always),
];

/// Returns the guard of the `from -> to` transition, or `None` if the
/// transition is not allowed.
pub(crate) fn guard(from: Section, to: Section) -> Option<Guard> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == from && t.to == to)
        .map(|t| t.guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_order_is_allowed() {
        assert_eq!(guard(Section::Start, Section::Colon), Some(Guard::Always));
        assert_eq!(
            guard(Section::Colon, Section::Ressource),
            Some(Guard::HasColonists)
        );
        assert_eq!(
            guard(Section::Ressource, Section::Deteste),
            Some(Guard::CountsMatch)
        );
        assert_eq!(
            guard(Section::Deteste, Section::Preferences),
            Some(Guard::CountsMatch)
        );
    }

    #[test]
    fn test_skipping_or_going_back_is_rejected() {
        assert_eq!(guard(Section::Start, Section::Ressource), None);
        assert_eq!(guard(Section::Colon, Section::Deteste), None);
        assert_eq!(guard(Section::Ressource, Section::Preferences), None);
        assert_eq!(guard(Section::Deteste, Section::Colon), None);
        assert_eq!(guard(Section::Preferences, Section::Ressource), None);
    }
}
