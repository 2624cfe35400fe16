//! Core types for the Weft entity world.
//!
//! This crate provides:
//! - [`Value`] - The closed attribute value union
//! - [`Vec3`] - The positional value type with y-dominant ordering
//! - [`EntityId`] / [`Namespace`] - Prefixed string entity identities
//! - [`Error`] - Error types for storage operations
//! - [`AttrMap`] - Persistent attribute map with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod entity;
pub mod error;
pub mod value;
pub mod vector;

pub use collections::AttrMap;
pub use entity::{EntityId, Namespace};
pub use error::{Error, ErrorKind, Result};
pub use value::{Value, ValueKind};
pub use vector::Vec3;
