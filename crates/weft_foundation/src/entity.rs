//! Entity identifiers with namespace prefixes.

use std::fmt;
use std::sync::Arc;

/// Which side of the wire minted an entity.
///
/// Server and client each run their own world with its own counter; the
/// prefix keeps the two id streams disjoint so entities can be merged
/// without collision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Server-originated entities (`srv` prefix).
    Server,
    /// Client-originated entities (`cln` prefix).
    Client,
}

impl Namespace {
    /// Returns the id prefix for this namespace.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Server => "srv",
            Self::Client => "cln",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Immutable entity identity: a namespace prefix plus a serial number.
///
/// Ids are cheap to clone and hashable; identity is the sole equality key
/// for an entity from the caller's point of view.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EntityId(Arc<str>);

impl EntityId {
    /// Composes an id from a namespace and a serial number (e.g. `cln0`).
    #[must_use]
    pub fn compose(namespace: Namespace, serial: u64) -> Self {
        Self(format!("{}{serial}", namespace.prefix()).into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
