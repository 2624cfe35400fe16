//! Predicate combinators over attribute values.
//!
//! Each combinator takes an owned reference value and returns a
//! [`Predicate`] testing one candidate value. Comparisons dispatch through
//! [`Value::partial_compare`]: the vector variant uses its own three-way
//! compare, primitives use native ordering, and mixed variants fail fast
//! with a type-mismatch error instead of ordering arbitrarily.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use weft_foundation::{Result, Value};

/// A pure test over a single attribute value.
///
/// Cloning is cheap (shared function). Evaluation is fallible so that
/// cross-variant ordered comparisons surface as errors from
/// [`find`](crate::World::find) rather than as silent non-matches.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> Result<bool> + Send + Sync>);

impl Predicate {
    fn from_fn(f: impl Fn(&Value) -> Result<bool> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Tests a candidate value.
    ///
    /// # Errors
    ///
    /// Returns a type-mismatch error if the predicate performs an ordered
    /// comparison and the candidate's variant differs from the reference's.
    pub fn test(&self, value: &Value) -> Result<bool> {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate(..)")
    }
}

/// Matches candidates equal to `reference`.
///
/// Vectors are equal when their three-way compare yields zero; primitives
/// use native equality. A candidate of a different variant is simply not
/// equal (no error).
#[must_use]
pub fn eq(reference: impl Into<Value>) -> Predicate {
    let reference = reference.into();
    Predicate::from_fn(move |candidate| Ok(*candidate == reference))
}

/// Matches candidates strictly less than `reference`.
#[must_use]
pub fn lt(reference: impl Into<Value>) -> Predicate {
    let reference = reference.into();
    Predicate::from_fn(move |candidate| {
        Ok(candidate.partial_compare(&reference)? == Some(Ordering::Less))
    })
}

/// Matches candidates strictly greater than `reference`.
#[must_use]
pub fn gt(reference: impl Into<Value>) -> Predicate {
    let reference = reference.into();
    Predicate::from_fn(move |candidate| {
        Ok(candidate.partial_compare(&reference)? == Some(Ordering::Greater))
    })
}

/// Matches candidates not strictly greater than `reference`.
///
/// Derived as `not(gt(reference))`, not as an independent `<=`: an unordered
/// pair (NaN) is "not greater" and therefore matches.
#[must_use]
pub fn lte(reference: impl Into<Value>) -> Predicate {
    not(gt(reference))
}

/// Matches candidates not strictly less than `reference`.
///
/// Derived as `not(lt(reference))`; see [`lte`] for the unordered-pair
/// consequence.
#[must_use]
pub fn gte(reference: impl Into<Value>) -> Predicate {
    not(lt(reference))
}

/// Logical negation of a predicate. Errors propagate un-negated.
#[must_use]
pub fn not(predicate: Predicate) -> Predicate {
    Predicate::from_fn(move |candidate| Ok(!predicate.test(candidate)?))
}
