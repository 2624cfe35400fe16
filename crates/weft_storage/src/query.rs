//! Query construction.

use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;

/// An ordered set of (attribute name, predicate) clauses.
///
/// Clause order is significant: results of
/// [`World::find`](crate::World::find) keep the relative order of the first
/// clause's index list. An empty query matches every entity.
#[derive(Clone, Default)]
pub struct Query {
    clauses: Vec<(Arc<str>, Predicate)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause: the named attribute must exist and satisfy `predicate`.
    ///
    /// An entity that does not carry the attribute at all never satisfies
    /// the clause, whatever the predicate, including negated ones.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<Arc<str>>, predicate: Predicate) -> Self {
        self.clauses.push((attribute.into(), predicate));
        self
    }

    /// Returns the number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if the query has no clauses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates the clauses in insertion order.
    pub fn clauses(&self) -> impl Iterator<Item = (&Arc<str>, &Predicate)> {
        self.clauses.iter().map(|(name, predicate)| (name, predicate))
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.clauses.iter().map(|(name, _)| name))
            .finish()
    }
}
