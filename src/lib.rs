//! Weft - Attribute-indexed entity world
//!
//! This crate re-exports both layers of the Weft system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: weft_storage    - World, inverted attribute index, predicates, queries
//! Layer 0: weft_foundation - Core types (Value, Vec3, EntityId, AttrMap, Error)
//! ```

pub use weft_foundation as foundation;
pub use weft_storage as storage;
