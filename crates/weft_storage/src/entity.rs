//! Frozen entity snapshots.

use std::fmt;

use weft_foundation::{AttrMap, EntityId, Value};

/// A point-in-time copy of an entity, handed to callers by the world.
///
/// Snapshots are decoupled from the canonical record: a later
/// [`assign`](crate::World::assign) on the same entity does not change a
/// snapshot taken earlier. Equality is by id only; two snapshots with the
/// same id denote the same logical entity at possibly different instants.
#[derive(Clone)]
pub struct Entity {
    id: EntityId,
    attributes: AttrMap,
}

impl Entity {
    /// Creates a snapshot from an id and an attribute map.
    ///
    /// Only the world mints snapshots of stored entities; constructing one
    /// directly never inserts anything into a world.
    #[must_use]
    pub const fn new(id: EntityId, attributes: AttrMap) -> Self {
        Self { id, attributes }
    }

    /// Returns the entity's identity.
    #[must_use]
    pub const fn id(&self) -> &EntityId {
        &self.id
    }

    /// Gets an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns true if the snapshot carries the named attribute.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Returns the full attribute map.
    #[must_use]
    pub const fn attributes(&self) -> &AttrMap {
        &self.attributes
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("attributes", &self.attributes)
            .finish()
    }
}
