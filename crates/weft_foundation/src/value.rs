//! Attribute value union.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::vector::Vec3;

/// The value attached to an entity attribute.
///
/// A closed tagged union: primitives compare with native equality and
/// ordering, while [`Vec3`] carries its own three-way compare. Two values
/// only ever order against each other when they share a variant.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit floating point number.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Text value.
    Text(Arc<str>),
    /// Positional value with y-dominant ordering.
    Vector(Vec3),
}

/// Names a [`Value`] variant, for diagnostics and mismatch errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A [`Value::Number`].
    Number,
    /// A [`Value::Bool`].
    Bool,
    /// A [`Value::Text`].
    Text,
    /// A [`Value::Vector`].
    Vector,
}

impl Value {
    /// Returns the variant of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Bool(_) => ValueKind::Bool,
            Self::Text(_) => ValueKind::Text,
            Self::Vector(_) => ValueKind::Vector,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a text reference.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a vector.
    #[must_use]
    pub const fn as_vector(&self) -> Option<Vec3> {
        match self {
            Self::Vector(v) => Some(*v),
            _ => None,
        }
    }

    /// Three-way comparison against a value of the same variant.
    ///
    /// Vectors dispatch to [`Vec3::compare`]; primitives use native ordering.
    /// Returns `Ok(None)` when the pair is unordered (NaN numbers) and an
    /// error when the variants differ, rather than inventing an ordering.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch)
    /// if `other` is a different variant.
    pub fn partial_compare(&self, other: &Self) -> Result<Option<Ordering>> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Ok(a.partial_cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Ok(Some(a.cmp(b))),
            (Self::Text(a), Self::Text(b)) => Ok(Some(a.cmp(b))),
            (Self::Vector(a), Self::Vector(b)) => Ok(Some(a.compare(b))),
            _ => Err(Error::type_mismatch(other.kind(), self.kind())),
        }
    }
}

// Semantic equality: differing variants are unequal, numbers follow IEEE 754
// (NaN != NaN), vectors are equal when their three-way compare says so.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a.compare(b) == Ordering::Equal,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Vector(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Bool => write!(f, "bool"),
            Self::Text => write!(f, "text"),
            Self::Vector => write!(f, "vector"),
        }
    }
}

// Convenience From implementations

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Self::Vector(v)
    }
}
