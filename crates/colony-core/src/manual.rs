//! Manual colony entry.
//!
//! Builds a [`Document`] step by step the way an interactive session does:
//! pick a colony size, then add rivalries and preference lists until every
//! colonist is covered. Colonists are named `A`, `B`, ... and resources
//! `1`, `2`, ... up to the colony size.
//!
//! ```
//! use colony_core::ManualBuilder;
//!
//! let mut builder = ManualBuilder::with_colonist_count(2).unwrap();
//! builder.add_conflict_tokens("A B").unwrap();
//! builder.add_preferences_tokens("A 1 2").unwrap();
//! assert!(!builder.is_complete());
//! builder.add_preferences_tokens("B 1 2").unwrap();
//!
//! let document = builder.verify().unwrap();
//! assert_eq!(document.colonists().len(), 2);
//! ```

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::domain::{
    ColonistId, ConflictPair, ConflictRegistry, Document, EntityRegistry, PreferenceList,
    PreferenceTable, ResourceId,
};
use crate::parser::MAX_COLONISTS;

/// Rejected manual entry. The builder is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManualError {
    #[error("colony size must be between 1 and {max}, got {requested}")]
    InvalidColonistCount { requested: usize, max: usize },

    /// Input did not split into the expected number of tokens.
    #[error("incorrect format, expected {expected}")]
    Format { expected: String },

    #[error("a colonist cannot be in conflict with itself")]
    SelfConflict,

    #[error("colonist '{0}' does not exist")]
    UnknownColonist(String),

    #[error("resource '{0}' does not exist")]
    UnknownResource(String),

    #[error("conflict between '{0}' and '{1}' already exists")]
    DuplicateConflict(String, String),

    #[error("preferences of colonist '{0}' are already defined")]
    DuplicatePreferences(String),

    #[error("resource '{0}' is listed twice")]
    DuplicateResource(String),

    #[error("colonist '{0}' has incomplete preferences")]
    IncompletePreferences(ColonistId),
}

/// Step-by-step colony construction.
#[derive(Debug, Clone)]
pub struct ManualBuilder {
    registry: EntityRegistry,
    conflicts: ConflictRegistry,
    preferences: PreferenceTable,
}

impl ManualBuilder {
    /// Creates a colony of `count` colonists and as many resources, with
    /// the default size limit.
    pub fn with_colonist_count(count: usize) -> Result<Self, ManualError> {
        Self::with_colonist_count_limited(count, MAX_COLONISTS)
    }

    /// Creates a colony of `count` colonists, rejecting sizes above `max`.
    ///
    /// Colonist names are letters, so `max` is capped at 26.
    pub fn with_colonist_count_limited(count: usize, max: usize) -> Result<Self, ManualError> {
        let max = max.min(MAX_COLONISTS);
        if count == 0 || count > max {
            return Err(ManualError::InvalidColonistCount {
                requested: count,
                max,
            });
        }

        let mut registry = EntityRegistry::new();
        for (letter, number) in (b'A'..).zip(1..=count) {
            // Letters and digits never collide, so registration cannot fail.
            let _ = registry.register_colonist(ColonistId::new(char::from(letter)));
            let _ = registry.register_resource(ResourceId::new(number.to_string()));
        }

        Ok(Self {
            registry,
            conflicts: ConflictRegistry::new(),
            preferences: PreferenceTable::new(),
        })
    }

    /// Parses a count typed by a user, as in `"3"`.
    pub fn parse_count(input: &str, max: usize) -> Result<Self, ManualError> {
        let count = input
            .trim()
            .parse::<usize>()
            .map_err(|_| ManualError::Format {
                expected: format!("a number between 1 and {}", max.min(MAX_COLONISTS)),
            })?;
        Self::with_colonist_count_limited(count, max)
    }

    pub fn colonists(&self) -> &[ColonistId] {
        self.registry.colonists()
    }

    pub fn resources(&self) -> &[ResourceId] {
        self.registry.resources()
    }

    pub fn conflicts(&self) -> &ConflictRegistry {
        &self.conflicts
    }

    pub fn has_preferences(&self, colonist: &str) -> bool {
        self.preferences.contains(colonist)
    }

    /// Adds a rivalry from a line such as `"A B"`.
    pub fn add_conflict_tokens(&mut self, line: &str) -> Result<(), ManualError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [a, b] => self.add_conflict(a, b),
            _ => Err(ManualError::Format {
                expected: "two colonists, for example: A B".to_string(),
            }),
        }
    }

    /// Adds a rivalry between `a` and `b`.
    pub fn add_conflict(&mut self, a: &str, b: &str) -> Result<(), ManualError> {
        if a == b {
            return Err(ManualError::SelfConflict);
        }
        let left = self.known_colonist(a)?;
        let right = self.known_colonist(b)?;
        if self.conflicts.contains(a, b) {
            return Err(ManualError::DuplicateConflict(a.to_string(), b.to_string()));
        }
        let pair = ConflictPair::new(left, right).ok_or(ManualError::SelfConflict)?;
        self.conflicts.insert(pair);
        debug!(event = "conflict_added", left = a, right = b);
        Ok(())
    }

    /// Adds a preference list from a line such as `"A 1 3 2"`.
    pub fn add_preferences_tokens(&mut self, line: &str) -> Result<(), ManualError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let expected = self.registry.colonist_count() + 1;
        match tokens.split_first() {
            Some((name, ranked)) if tokens.len() == expected => self.add_preferences(name, ranked),
            _ => Err(ManualError::Format {
                expected: format!(
                    "a colonist followed by {} resources, for example: A {}",
                    expected - 1,
                    self.example_ranking()
                ),
            }),
        }
    }

    /// Stores the ranking of `colonist`.
    pub fn add_preferences(&mut self, colonist: &str, ranked: &[&str]) -> Result<(), ManualError> {
        let id = self.known_colonist(colonist)?;
        if self.preferences.contains(colonist) {
            return Err(ManualError::DuplicatePreferences(colonist.to_string()));
        }
        if ranked.len() != self.registry.resource_count() {
            return Err(ManualError::Format {
                expected: format!(
                    "{} resources, for example: {}",
                    self.registry.resource_count(),
                    self.example_ranking()
                ),
            });
        }

        let mut seen = HashSet::with_capacity(ranked.len());
        let mut list = Vec::with_capacity(ranked.len());
        for &name in ranked {
            let resource = self
                .registry
                .resource(name)
                .cloned()
                .ok_or_else(|| ManualError::UnknownResource(name.to_string()))?;
            if !seen.insert(name) {
                return Err(ManualError::DuplicateResource(name.to_string()));
            }
            list.push(resource);
        }

        self.preferences.insert(id, PreferenceList::new(list));
        debug!(event = "preferences_added", colonist = colonist);
        Ok(())
    }

    /// Returns true once every colonist has a complete preference list.
    pub fn is_complete(&self) -> bool {
        self.first_incomplete().is_none()
    }

    /// First colonist, in order, still lacking a complete list.
    pub fn first_incomplete(&self) -> Option<&ColonistId> {
        self.registry.colonists().iter().find(|c| {
            self.preferences
                .get(c.as_str())
                .map_or(true, |list| !list.is_permutation_of(self.registry.resources()))
        })
    }

    /// Completes the entry and returns the document.
    ///
    /// # Errors
    ///
    /// Names the first colonist whose preferences are missing.
    pub fn verify(self) -> Result<Document, ManualError> {
        if let Some(missing) = self.first_incomplete() {
            return Err(ManualError::IncompletePreferences(missing.clone()));
        }
        Ok(Document::from_parts(
            self.registry,
            self.conflicts,
            self.preferences,
        ))
    }

    fn known_colonist(&self, name: &str) -> Result<ColonistId, ManualError> {
        self.registry
            .colonist(name)
            .cloned()
            .ok_or_else(|| ManualError::UnknownColonist(name.to_string()))
    }

    fn example_ranking(&self) -> String {
        self.registry
            .resources()
            .iter()
            .map(ResourceId::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
