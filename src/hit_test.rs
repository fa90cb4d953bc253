use super::*;

use crate::geom::Point;
use crate::item::{FnResolver, MapResolver};

fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
    Rect::from_edges(x1, y1, x2, y2)
}

fn drag(from: Point, to: Point) -> Rect {
    Rect::from_corners(from, to)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn layout(entries: &[(&str, Rect)]) -> MapResolver {
    let mut resolver = MapResolver::new();
    for (id, r) in entries {
        resolver.insert(*id, *r);
    }
    resolver
}

fn ids(entries: &[&str]) -> Vec<ItemId> {
    entries.iter().map(|id| (*id).to_string()).collect()
}

// =============================================================
// CollisionPolicy
// =============================================================

#[test]
fn policy_default_is_intersect() {
    assert_eq!(CollisionPolicy::default(), CollisionPolicy::Intersect);
}

#[test]
fn policy_serde_roundtrip() {
    let json = serde_json::to_string(&CollisionPolicy::Contained).unwrap();
    assert_eq!(json, "\"contained\"");
    let back: CollisionPolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(back, CollisionPolicy::Contained);
}

#[test]
fn policy_serde_lowercase_names() {
    assert_eq!(serde_json::to_string(&CollisionPolicy::Intersect).unwrap(), "\"intersect\"");
    assert_eq!(serde_json::to_string(&CollisionPolicy::Contained).unwrap(), "\"contained\"");
}

// =============================================================
// collides: intersect
// =============================================================

#[test]
fn intersect_overlapping_rects() {
    let sel = drag(pt(5.0, 5.0), pt(15.0, 15.0));
    let item = rect(10.0, 10.0, 20.0, 20.0);
    assert!(collides(&sel, &item, CollisionPolicy::Intersect));
}

#[test]
fn intersect_disjoint_rects() {
    let sel = drag(pt(0.0, 0.0), pt(5.0, 5.0));
    let item = rect(10.0, 10.0, 20.0, 20.0);
    assert!(!collides(&sel, &item, CollisionPolicy::Intersect));
}

#[test]
fn intersect_touching_edges_do_not_count() {
    // Strict open-interval overlap: a shared edge is not an intersection.
    let item = rect(10.0, 10.0, 20.0, 20.0);
    let touching_right = drag(pt(20.0, 10.0), pt(30.0, 20.0));
    let touching_bottom = drag(pt(10.0, 20.0), pt(20.0, 30.0));
    assert!(!collides(&touching_right, &item, CollisionPolicy::Intersect));
    assert!(!collides(&touching_bottom, &item, CollisionPolicy::Intersect));
}

#[test]
fn intersect_touching_corner_does_not_count() {
    let item = rect(10.0, 10.0, 20.0, 20.0);
    let sel = drag(pt(20.0, 20.0), pt(30.0, 30.0));
    assert!(!collides(&sel, &item, CollisionPolicy::Intersect));
}

#[test]
fn intersect_handles_non_normalized_selection() {
    // Same rectangle dragged up-left instead of down-right.
    let item = rect(10.0, 10.0, 20.0, 20.0);
    let sel = drag(pt(15.0, 15.0), pt(5.0, 5.0));
    assert!(collides(&sel, &item, CollisionPolicy::Intersect));
}

#[test]
fn intersect_is_symmetric() {
    let cases = [
        (drag(pt(5.0, 5.0), pt(15.0, 15.0)), rect(10.0, 10.0, 20.0, 20.0)),
        (drag(pt(0.0, 0.0), pt(5.0, 5.0)), rect(10.0, 10.0, 20.0, 20.0)),
        (drag(pt(20.0, 10.0), pt(30.0, 20.0)), rect(10.0, 10.0, 20.0, 20.0)),
        (drag(pt(12.0, 12.0), pt(14.0, 14.0)), rect(10.0, 10.0, 20.0, 20.0)),
    ];
    for (a, b) in cases {
        assert_eq!(
            collides(&a, &b, CollisionPolicy::Intersect),
            collides(&b, &a, CollisionPolicy::Intersect),
        );
    }
}

#[test]
fn intersect_item_inside_selection() {
    let sel = drag(pt(0.0, 0.0), pt(100.0, 100.0));
    let item = rect(10.0, 10.0, 20.0, 20.0);
    assert!(collides(&sel, &item, CollisionPolicy::Intersect));
}

#[test]
fn intersect_selection_inside_item() {
    let sel = drag(pt(12.0, 12.0), pt(14.0, 14.0));
    let item = rect(10.0, 10.0, 20.0, 20.0);
    assert!(collides(&sel, &item, CollisionPolicy::Intersect));
}

// =============================================================
// collides: contained
// =============================================================

#[test]
fn contained_fully_enclosed_item() {
    let sel = drag(pt(5.0, 5.0), pt(25.0, 25.0));
    let item = rect(10.0, 10.0, 20.0, 20.0);
    assert!(collides(&sel, &item, CollisionPolicy::Contained));
}

#[test]
fn contained_partial_overlap_is_not_contained() {
    let sel = drag(pt(5.0, 5.0), pt(15.0, 15.0));
    let item = rect(10.0, 10.0, 20.0, 20.0);
    assert!(!collides(&sel, &item, CollisionPolicy::Contained));
}

#[test]
fn contained_exact_fit_counts() {
    // Containment is closed on the edges, unlike intersection.
    let sel = drag(pt(10.0, 10.0), pt(20.0, 20.0));
    let item = rect(10.0, 10.0, 20.0, 20.0);
    assert!(collides(&sel, &item, CollisionPolicy::Contained));
}

#[test]
fn contained_handles_non_normalized_selection() {
    let sel = drag(pt(25.0, 25.0), pt(5.0, 5.0));
    let item = rect(10.0, 10.0, 20.0, 20.0);
    assert!(collides(&sel, &item, CollisionPolicy::Contained));
}

#[test]
fn contained_implies_intersect() {
    let items = [
        rect(10.0, 10.0, 20.0, 20.0),
        rect(0.0, 0.0, 1.0, 1.0),
        rect(5.0, 15.0, 35.0, 18.0),
        rect(40.0, 40.0, 50.0, 50.0),
    ];
    let sel = drag(pt(2.0, 2.0), pt(30.0, 30.0));
    for item in items {
        if collides(&sel, &item, CollisionPolicy::Contained) {
            assert!(collides(&sel, &item, CollisionPolicy::Intersect));
        }
    }
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn evaluate_collects_matching_items() {
    let boxes = layout(&[
        ("a", rect(0.0, 0.0, 10.0, 10.0)),
        ("b", rect(100.0, 100.0, 110.0, 110.0)),
    ]);
    let sel = drag(pt(5.0, 5.0), pt(20.0, 20.0));
    let selected = evaluate(&sel, &ids(&["a", "b"]), &boxes, CollisionPolicy::Intersect);
    assert_eq!(selected, ids(&["a"]));
}

#[test]
fn evaluate_preserves_candidate_order() {
    let boxes = layout(&[
        ("c", rect(30.0, 0.0, 40.0, 10.0)),
        ("a", rect(0.0, 0.0, 10.0, 10.0)),
        ("b", rect(15.0, 0.0, 25.0, 10.0)),
    ]);
    // All three collide; output order must follow the candidate list, not
    // position.
    let sel = drag(pt(-5.0, -5.0), pt(50.0, 50.0));
    let selected = evaluate(&sel, &ids(&["c", "a", "b"]), &boxes, CollisionPolicy::Intersect);
    assert_eq!(selected, ids(&["c", "a", "b"]));
}

#[test]
fn evaluate_skips_unresolvable_items() {
    let boxes = layout(&[("a", rect(0.0, 0.0, 10.0, 10.0))]);
    let sel = drag(pt(-5.0, -5.0), pt(50.0, 50.0));
    let selected = evaluate(&sel, &ids(&["a", "missing"]), &boxes, CollisionPolicy::Intersect);
    assert_eq!(selected, ids(&["a"]));
}

#[test]
fn evaluate_empty_candidates_is_empty() {
    let boxes = layout(&[]);
    let sel = drag(pt(0.0, 0.0), pt(10.0, 10.0));
    let selected = evaluate(&sel, &[], &boxes, CollisionPolicy::Intersect);
    assert!(selected.is_empty());
}

#[test]
fn evaluate_contained_subset_of_intersect() {
    let boxes = layout(&[
        ("inside", rect(10.0, 10.0, 20.0, 20.0)),
        ("straddling", rect(25.0, 25.0, 45.0, 45.0)),
        ("outside", rect(60.0, 60.0, 70.0, 70.0)),
    ]);
    let candidates = ids(&["inside", "straddling", "outside"]);
    let sel = drag(pt(5.0, 5.0), pt(30.0, 30.0));

    let intersecting = evaluate(&sel, &candidates, &boxes, CollisionPolicy::Intersect);
    let contained = evaluate(&sel, &candidates, &boxes, CollisionPolicy::Contained);

    assert_eq!(intersecting, ids(&["inside", "straddling"]));
    assert_eq!(contained, ids(&["inside"]));
    for id in &contained {
        assert!(intersecting.contains(id));
    }
}

#[test]
fn evaluate_with_closure_resolver() {
    let resolver = FnResolver::new(|id: &str| match id {
        "a" => Some(rect(0.0, 0.0, 10.0, 10.0)),
        _ => None,
    });
    let sel = drag(pt(5.0, 5.0), pt(8.0, 8.0));
    let selected = evaluate(&sel, &ids(&["a", "b"]), &resolver, CollisionPolicy::Intersect);
    assert_eq!(selected, ids(&["a"]));
}

#[test]
fn evaluate_zero_size_selection_selects_nothing_by_intersect() {
    // A zero-area rectangle cannot strictly overlap anything.
    let boxes = layout(&[("a", rect(0.0, 0.0, 10.0, 10.0))]);
    let sel = Rect::at(pt(5.0, 5.0));
    let selected = evaluate(&sel, &ids(&["a"]), &boxes, CollisionPolicy::Intersect);
    assert!(selected.is_empty());
}
