//! Persistent attribute map with structural sharing.
//!
//! A thin wrapper around `im::HashMap`, giving attribute storage O(1)
//! cloning. Snapshots handed to callers share structure with the canonical
//! record at the instant they were taken and are unaffected by later
//! mutation of the record.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Persistent map from attribute name to [`Value`].
///
/// Cloning is O(1). [`AttrMap::set`] returns a new map sharing structure
/// with the original.
#[derive(Clone, Default)]
pub struct AttrMap(im::HashMap<Arc<str>, Value>);

impl AttrMap {
    /// Creates an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns true if the map carries the named attribute.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns a new map with the attribute set (overwrite-if-present).
    #[must_use]
    pub fn set(&self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        let mut new = self.0.clone();
        new.insert(name.into(), value.into());
        Self(new)
    }

    /// Returns an iterator over (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.0.iter()
    }

    /// Returns an iterator over attribute names.
    pub fn names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.0.keys()
    }
}

impl fmt::Debug for AttrMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for AttrMap {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<N: Into<Arc<str>>, V: Into<Value>> FromIterator<(N, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}
