//! Integration tests for the query engine
//!
//! Tests existential scoping, intersection, ordering, and error surfacing.

use weft_foundation::{AttrMap, ErrorKind, Namespace, Vec3};
use weft_storage::{Query, World, eq, gt, lt, not};

fn attrs<const N: usize>(pairs: [(&str, weft_foundation::Value); N]) -> AttrMap {
    pairs.into_iter().collect()
}

// =============================================================================
// Existential Scoping
// =============================================================================

#[test]
fn negated_predicates_never_match_absent_attributes() {
    let mut world = World::new();
    let without_bob = world.spawn(Namespace::Client, &AttrMap::new());
    let with_bob = world.spawn(Namespace::Client, &attrs([("bob", 9.into())]));

    let found = world.find(&Query::new().with("bob", not(eq(7)))).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), with_bob.id());
    assert!(found.iter().all(|e| e.id() != without_bob.id()));
}

#[test]
fn every_clause_requires_the_attribute() {
    let mut world = World::new();
    world.spawn(Namespace::Client, &attrs([("a", 1.into())]));

    // The entity has `a` but not `b`; the second clause excludes it.
    let found = world
        .find(&Query::new().with("a", eq(1)).with("b", not(eq(0))))
        .unwrap();
    assert!(found.is_empty());
}

// =============================================================================
// Intersection
// =============================================================================

#[test]
fn two_clause_intersection_selects_the_overlap() {
    let mut world = World::new();
    world.spawn(
        Namespace::Client,
        &attrs([("bob", 7.into()), ("bob2", 7.into())]),
    );
    let target = world.spawn(
        Namespace::Client,
        &attrs([("bob", 7.into()), ("bob2", 8.into())]),
    );

    let found = world
        .find(&Query::new().with("bob", eq(7)).with("bob2", eq(8)))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), target.id());
}

#[test]
fn three_clause_intersection() {
    let mut world = World::new();
    let target = world.spawn(
        Namespace::Client,
        &attrs([("a", 1.into()), ("b", 2.into()), ("c", 3.into())]),
    );
    world.spawn(
        Namespace::Client,
        &attrs([("a", 1.into()), ("b", 2.into())]),
    );
    world.spawn(
        Namespace::Client,
        &attrs([("a", 1.into()), ("c", 3.into())]),
    );

    let found = world
        .find(
            &Query::new()
                .with("a", eq(1))
                .with("b", eq(2))
                .with("c", eq(3)),
        )
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), target.id());
}

#[test]
fn disjoint_clauses_intersect_to_nothing() {
    let mut world = World::new();
    world.spawn(Namespace::Client, &attrs([("a", 1.into())]));
    world.spawn(Namespace::Client, &attrs([("b", 2.into())]));

    let found = world
        .find(&Query::new().with("a", eq(1)).with("b", eq(2)))
        .unwrap();
    assert!(found.is_empty());
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn empty_query_preserves_creation_order() {
    let mut world = World::new();
    let ids: Vec<String> = (0..5)
        .map(|_| world.spawn(Namespace::Client, &AttrMap::new()).id().to_string())
        .collect();

    let found = world.find(&Query::new()).unwrap();
    let found_ids: Vec<String> = found.iter().map(|e| e.id().to_string()).collect();
    assert_eq!(found_ids, ids);
}

#[test]
fn results_follow_the_first_clause_index_order() {
    let mut world = World::new();

    // e2 gains `first` before e1 does, so the `first` index lists e2 first.
    let e1 = world.spawn(Namespace::Client, &attrs([("second", 1.into())]));
    let e2 = world.spawn(
        Namespace::Client,
        &attrs([("first", 1.into()), ("second", 1.into())]),
    );
    world.assign(e1.id(), &attrs([("first", 1.into())])).unwrap();

    let found = world
        .find(&Query::new().with("first", eq(1)).with("second", eq(1)))
        .unwrap();
    let ids: Vec<&str> = found.iter().map(|e| e.id().as_str()).collect();
    assert_eq!(ids, vec![e2.id().as_str(), e1.id().as_str()]);
}

// =============================================================================
// Positional Queries
// =============================================================================

#[test]
fn visibility_style_position_query() {
    // The render-loop usage pattern: select drawables below a y threshold.
    let mut world = World::new();
    let on_screen = world.spawn(
        Namespace::Client,
        &attrs([("position", Vec3::new(3.0, 5.0, 0.0).into())]),
    );
    world.spawn(
        Namespace::Client,
        &attrs([("position", Vec3::new(0.0, 50.0, 0.0).into())]),
    );
    world.spawn(Namespace::Client, &AttrMap::new());

    let ceiling = Vec3::new(0.0, 10.0, 0.0);
    let found = world
        .find(&Query::new().with("position", lt(ceiling)))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), on_screen.id());
}

#[test]
fn open_interval_over_a_single_attribute() {
    let mut world = World::new();
    for hp in [10, 50, 90] {
        world.spawn(Namespace::Server, &attrs([("hp", hp.into())]));
    }

    let found = world
        .find(&Query::new().with("hp", gt(10)).with("hp", lt(90)))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get("hp"), Some(&50.into()));
}

// =============================================================================
// Error Surfacing
// =============================================================================

#[test]
fn ordered_comparison_across_kinds_fails_the_find() {
    let mut world = World::new();
    world.spawn(Namespace::Client, &attrs([("bob", true.into())]));

    let err = world
        .find(&Query::new().with("bob", lt(7)))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn eq_across_kinds_is_a_miss_not_an_error() {
    let mut world = World::new();
    world.spawn(Namespace::Client, &attrs([("bob", true.into())]));

    let found = world.find(&Query::new().with("bob", eq(7))).unwrap();
    assert!(found.is_empty());
}

#[test]
fn unindexed_attribute_yields_nothing() {
    let mut world = World::new();
    world.spawn(Namespace::Client, &attrs([("a", 1.into())]));

    let found = world.find(&Query::new().with("never-set", eq(1))).unwrap();
    assert!(found.is_empty());
}
