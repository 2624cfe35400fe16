//! Attribute-indexed entity world and predicate query engine for Weft.
//!
//! This crate provides:
//! - [`Entity`] - Frozen point-in-time entity snapshots
//! - [`Predicate`] and the `eq`/`lt`/`gt`/`lte`/`gte`/`not` combinators
//! - [`Query`] - An ordered set of per-attribute predicate clauses
//! - [`World`] - Canonical entity storage with an inverted attribute index

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod predicate;
pub mod query;
pub mod world;

pub use entity::Entity;
pub use predicate::{Predicate, eq, gt, gte, lt, lte, not};
pub use query::Query;
pub use world::World;
