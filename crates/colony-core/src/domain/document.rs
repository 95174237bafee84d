//! The aggregate colony description.

use super::conflict::ConflictRegistry;
use super::ids::{ColonistId, ResourceId};
use super::preference::{PreferenceList, PreferenceTable};
use super::registry::EntityRegistry;

/// Colonists, resources, conflicts and preferences of one colony.
///
/// Documents returned by [`crate::parse_configuration`] and
/// [`crate::ManualBuilder::verify`] are complete: colonist and resource
/// counts match and every colonist ranks every resource exactly once.
/// [`Document::from_parts`] assembles a document without those checks; the
/// allocation engine re-validates before using it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    registry: EntityRegistry,
    conflicts: ConflictRegistry,
    preferences: PreferenceTable,
}

impl Document {
    /// Assembles a document from already-built parts without validation.
    pub fn from_parts(
        registry: EntityRegistry,
        conflicts: ConflictRegistry,
        preferences: PreferenceTable,
    ) -> Self {
        Self {
            registry,
            conflicts,
            preferences,
        }
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Colonists in registration order.
    pub fn colonists(&self) -> &[ColonistId] {
        self.registry.colonists()
    }

    /// Resources in registration order.
    pub fn resources(&self) -> &[ResourceId] {
        self.registry.resources()
    }

    pub fn conflicts(&self) -> &ConflictRegistry {
        &self.conflicts
    }

    pub fn preferences(&self) -> &PreferenceTable {
        &self.preferences
    }

    pub fn preferences_of(&self, colonist: &str) -> Option<&PreferenceList> {
        self.preferences.get(colonist)
    }

    /// Returns the first colonist, in registration order, whose preference
    /// list is missing or not a permutation of the resource set.
    pub fn first_incomplete(&self) -> Option<&ColonistId> {
        self.colonists().iter().find(|c| {
            self.preferences
                .get(c.as_str())
                .map_or(true, |list| !list.is_permutation_of(self.resources()))
        })
    }

    /// Returns true if counts match and every preference list is complete.
    pub fn is_complete(&self) -> bool {
        self.registry.colonist_count() == self.registry.resource_count()
            && self.first_incomplete().is_none()
    }
}
