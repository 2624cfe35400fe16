//! Integration tests for Layer 1: Storage
//!
//! Tests for entity snapshots, predicate combinators, queries, and the world.

mod predicates;
mod queries;
