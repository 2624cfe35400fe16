//! Integration tests for predicate combinators
//!
//! Tests the round-trip symmetries and the derived lte/gte forms.

use weft_foundation::{Value, Vec3};
use weft_storage::{eq, gt, gte, lt, lte, not};

// =============================================================================
// Symmetry and Duality
// =============================================================================

#[test]
fn eq_round_trips_for_primitives() {
    let pairs: [(Value, Value); 3] = [
        (7.into(), 7.into()),
        (7.into(), 8.into()),
        (true.into(), false.into()),
    ];
    for (a, b) in pairs {
        assert_eq!(
            eq(a.clone()).test(&b).unwrap(),
            eq(b).test(&a).unwrap()
        );
    }
}

#[test]
fn lt_gt_round_trips_for_vectors() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(3.0, 2.0, 1.0);
    assert_eq!(
        lt(a).test(&Value::from(b)).unwrap(),
        gt(b).test(&Value::from(a)).unwrap()
    );
}

// =============================================================================
// Derived Combinators
// =============================================================================

#[test]
fn lte_is_not_gt() {
    for candidate in [4.0, 5.0, 6.0] {
        let candidate = Value::from(candidate);
        assert_eq!(
            lte(5).test(&candidate).unwrap(),
            !gt(5).test(&candidate).unwrap()
        );
    }
}

#[test]
fn gte_is_not_lt() {
    for candidate in [4.0, 5.0, 6.0] {
        let candidate = Value::from(candidate);
        assert_eq!(
            gte(5).test(&candidate).unwrap(),
            !lt(5).test(&candidate).unwrap()
        );
    }
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn predicates_compose_with_not() {
    let neither_seven_nor_less = not(lte(7));
    assert!(neither_seven_nor_less.test(&Value::from(8.0)).unwrap());
    assert!(!neither_seven_nor_less.test(&Value::from(7.0)).unwrap());
}

#[test]
fn predicates_are_reusable() {
    let p = gt(10);
    // A predicate is a pure function; repeated tests are independent.
    assert!(p.test(&Value::from(11.0)).unwrap());
    assert!(!p.test(&Value::from(9.0)).unwrap());
    assert!(p.test(&Value::from(11.0)).unwrap());
}

#[test]
fn cloned_predicates_share_behavior() {
    let p = eq("name");
    let q = p.clone();
    assert!(q.test(&Value::from("name")).unwrap());
}
