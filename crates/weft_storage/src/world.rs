//! World state: canonical entity storage, the inverted attribute index, and
//! the query engine.
//!
//! The world owns every canonical record; callers only ever hold frozen
//! [`Entity`] snapshots. The index stores arena slots rather than references
//! into the record table, so canonical lookup stays O(1) without aliasing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use weft_foundation::{AttrMap, EntityId, Error, Namespace, Result};

use crate::entity::Entity;
use crate::predicate::Predicate;
use crate::query::Query;

/// A canonical entity record. Never handed out directly.
#[derive(Debug)]
struct Record {
    id: EntityId,
    attributes: AttrMap,
}

impl Record {
    /// Freezes the record's current state into a caller-facing snapshot.
    fn snapshot(&self) -> Entity {
        Entity::new(self.id.clone(), self.attributes.clone())
    }
}

/// The authoritative entity store.
///
/// Entities live for the lifetime of the world; there is no deletion. All
/// operations are synchronous and atomic with respect to one `World`;
/// concurrent callers must serialize access externally, since
/// [`assign`](World::assign) performs a check-then-append on the index.
#[derive(Debug, Default)]
pub struct World {
    /// Canonical records in creation order. Slots are never freed, so a
    /// slot is a stable handle for the index.
    records: Vec<Record>,
    /// Id table: entity id to arena slot.
    by_id: HashMap<EntityId, usize>,
    /// Inverted index: attribute name to the slots currently carrying it,
    /// in insertion order, no duplicate slots per list.
    index: HashMap<Arc<str>, Vec<usize>>,
    /// Monotonic serial shared by both namespaces.
    next_serial: u64,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entity with the given initial attributes.
    ///
    /// The id is the namespace prefix plus the next value of the world's
    /// counter (`cln0`, `cln1`, ...). Initial attributes go through the same
    /// routine [`assign`](World::assign) uses, so they are indexed
    /// identically. Returns a snapshot frozen at this instant.
    pub fn spawn(&mut self, namespace: Namespace, attributes: &AttrMap) -> Entity {
        let id = EntityId::compose(namespace, self.next_serial);
        self.next_serial += 1;

        let slot = self.records.len();
        self.records.push(Record {
            id: id.clone(),
            attributes: AttrMap::new(),
        });
        self.by_id.insert(id, slot);

        self.apply(slot, attributes);
        self.records[slot].snapshot()
    }

    /// Adds or overwrites attributes on an existing entity.
    ///
    /// Each attribute is written into the canonical record and appended to
    /// that attribute's index list if the entity is not already listed
    /// (repeated assigns never duplicate index entries). Returns a snapshot
    /// of the record after the merge.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EntityNotFound`](weft_foundation::ErrorKind::EntityNotFound)
    /// if `id` does not resolve (a stale or foreign handle). Nothing is
    /// mutated in that case.
    pub fn assign(&mut self, id: &EntityId, attributes: &AttrMap) -> Result<Entity> {
        let slot = *self
            .by_id
            .get(id)
            .ok_or_else(|| Error::entity_not_found(id.clone()))?;

        self.apply(slot, attributes);
        Ok(self.records[slot].snapshot())
    }

    /// Attribute-insertion routine shared by `spawn` and `assign`.
    fn apply(&mut self, slot: usize, attributes: &AttrMap) {
        for (name, value) in attributes.iter() {
            let record = &mut self.records[slot];
            record.attributes = record.attributes.set(name.clone(), value.clone());

            let slots = self.index.entry(name.clone()).or_default();
            if !slots.contains(&slot) {
                slots.push(slot);
            }
        }
    }

    /// Finds entities matching every clause of `query`.
    ///
    /// An empty query returns all entities in creation order. Otherwise each
    /// clause filters its attribute's index list by predicate, and the
    /// per-clause candidate sets are intersected, keeping the relative order
    /// of the first clause's list.
    ///
    /// Scoping is existential: an entity lacking a queried attribute never
    /// matches that clause, whatever the predicate: `not(eq(x))` matches
    /// entities carrying the attribute with a value other than `x`, never
    /// entities without the attribute.
    ///
    /// # Errors
    ///
    /// Propagates a type-mismatch error if a predicate performs an ordered
    /// comparison against a value of a different variant.
    pub fn find(&self, query: &Query) -> Result<Vec<Entity>> {
        if query.is_empty() {
            return Ok(self.records.iter().map(Record::snapshot).collect());
        }

        let mut clauses = query.clauses();
        let Some((first_name, first_predicate)) = clauses.next() else {
            return Ok(Vec::new());
        };
        let mut results = self.filter_slots(first_name, first_predicate)?;

        for (name, predicate) in clauses {
            let matching: HashSet<usize> =
                self.filter_slots(name, predicate)?.into_iter().collect();
            results.retain(|slot| matching.contains(slot));
        }

        Ok(results
            .into_iter()
            .map(|slot| self.records[slot].snapshot())
            .collect())
    }

    /// Filters one attribute's index list by a predicate.
    ///
    /// An attribute with no index list yields no candidates (not an error).
    fn filter_slots(&self, name: &str, predicate: &Predicate) -> Result<Vec<usize>> {
        let Some(slots) = self.index.get(name) else {
            return Ok(Vec::new());
        };

        let mut matching = Vec::new();
        for &slot in slots {
            // Index invariant: a listed slot always carries the attribute.
            if let Some(value) = self.records[slot].attributes.get(name) {
                if predicate.test(value)? {
                    matching.push(slot);
                }
            }
        }
        Ok(matching)
    }

    /// Gets a snapshot of an entity by id.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<Entity> {
        self.by_id.get(id).map(|&slot| self.records[slot].snapshot())
    }

    /// Returns true if the world holds an entity with this id.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no entities have been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates snapshots of all entities in creation order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.records.iter().map(Record::snapshot)
    }
}
