//! Hit-testing: collision policies and candidate evaluation.
//!
//! The selection rectangle is normalized once per evaluation; each candidate
//! box is tested against it under the active [`CollisionPolicy`]. Candidates
//! whose box cannot be resolved are skipped without error and reconsidered on
//! the next move event.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::geom::Rect;
use crate::item::{BoundsResolver, ItemId};

/// Rule deciding whether an item counts as selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Any overlap with the selection box counts.
    #[default]
    Intersect,
    /// The item's box must lie entirely within the selection box.
    Contained,
}

/// Whether `item` collides with the (possibly non-normalized) `selection`
/// under `policy`.
///
/// Intersection uses strict inequalities: a selection box exactly touching
/// an item's edge does not select it. Containment uses closed inequalities
/// on all four edges.
#[must_use]
pub fn collides(selection: &Rect, item: &Rect, policy: CollisionPolicy) -> bool {
    let sel = selection.bounds();
    let item = item.bounds();

    match policy {
        CollisionPolicy::Intersect => {
            sel.right().min(item.right()) > sel.left.max(item.left)
                && sel.bottom().min(item.bottom()) > sel.top.max(item.top)
        }
        CollisionPolicy::Contained => {
            sel.left <= item.left
                && item.right() <= sel.right()
                && sel.top <= item.top
                && item.bottom() <= sel.bottom()
        }
    }
}

/// Evaluate all `candidates` against `selection`, preserving input order.
///
/// Each candidate's box is resolved through `boxes` at call time; items the
/// resolver cannot measure are excluded from this result.
#[must_use]
pub fn evaluate<R>(
    selection: &Rect,
    candidates: &[ItemId],
    boxes: &R,
    policy: CollisionPolicy,
) -> Vec<ItemId>
where
    R: BoundsResolver + ?Sized,
{
    candidates
        .iter()
        .filter(|id| {
            boxes
                .resolve(id.as_str())
                .is_some_and(|item| collides(selection, &item, policy))
        })
        .cloned()
        .collect()
}
