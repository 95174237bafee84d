//! Registry of colonist and resource names.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use super::ids::{ColonistId, ResourceId};

/// The two disjoint name spaces of a colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Colonist,
    Resource,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Colonist => f.write_str("colonist"),
            Namespace::Resource => f.write_str("resource"),
        }
    }
}

/// Rejected registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("colonist '{0}' is already defined")]
    DuplicateColonist(ColonistId),

    #[error("resource '{0}' is already defined")]
    DuplicateResource(ResourceId),

    /// The name is already taken in the other namespace.
    #[error("name '{name}' is already used as a {existing}")]
    NameCollision { name: String, existing: Namespace },
}

/// Colonists and resources in registration order.
///
/// Registration order matters: the initial allocation serves colonists in
/// the order they were declared.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    colonists: Vec<ColonistId>,
    resources: Vec<ResourceId>,
    colonist_set: HashSet<ColonistId>,
    resource_set: HashSet<ResourceId>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a colonist.
    ///
    /// # Errors
    ///
    /// Fails if the name is already a colonist or already a resource.
    pub fn register_colonist(&mut self, id: ColonistId) -> Result<(), RegistryError> {
        if self.colonist_set.contains(&id) {
            return Err(RegistryError::DuplicateColonist(id));
        }
        if self.resource_set.contains(id.as_str()) {
            return Err(RegistryError::NameCollision {
                name: id.as_str().to_string(),
                existing: Namespace::Resource,
            });
        }
        self.colonist_set.insert(id.clone());
        self.colonists.push(id);
        Ok(())
    }

    /// Registers a resource.
    ///
    /// # Errors
    ///
    /// Fails if the name is already a resource or already a colonist.
    pub fn register_resource(&mut self, id: ResourceId) -> Result<(), RegistryError> {
        if self.resource_set.contains(&id) {
            return Err(RegistryError::DuplicateResource(id));
        }
        if self.colonist_set.contains(id.as_str()) {
            return Err(RegistryError::NameCollision {
                name: id.as_str().to_string(),
                existing: Namespace::Colonist,
            });
        }
        self.resource_set.insert(id.clone());
        self.resources.push(id);
        Ok(())
    }

    pub fn is_colonist(&self, name: &str) -> bool {
        self.colonist_set.contains(name)
    }

    pub fn is_resource(&self, name: &str) -> bool {
        self.resource_set.contains(name)
    }

    /// Colonists in registration order.
    pub fn colonists(&self) -> &[ColonistId] {
        &self.colonists
    }

    /// Resources in registration order.
    pub fn resources(&self) -> &[ResourceId] {
        &self.resources
    }

    pub fn colonist_count(&self) -> usize {
        self.colonists.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Returns the registered colonist matching `name`.
    pub fn colonist(&self, name: &str) -> Option<&ColonistId> {
        self.colonist_set.get(name)
    }

    /// Returns the registered resource matching `name`.
    pub fn resource(&self, name: &str) -> Option<&ResourceId> {
        self.resource_set.get(name)
    }
}
