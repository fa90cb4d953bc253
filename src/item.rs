//! Candidate items and the bounding-box lookup capability.
//!
//! The engine never owns or caches item positions. Each pointer-move it asks
//! a host-supplied [`BoundsResolver`] for every candidate's current box, so
//! items that reflow or animate mid-drag are measured fresh on the next
//! event. A resolver that cannot produce a box for an id returns `None` and
//! the item simply drops out of that evaluation.
//!
//! Hosts with live layout implement the trait directly (the browser host
//! uses [`crate::dom::DomResolver`]); headless hosts and tests can use
//! [`MapResolver`] for fixed layouts or [`FnResolver`] to wrap a lookup
//! closure.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::collections::HashMap;

use crate::geom::Rect;

/// Opaque identifier for a selectable item, assigned by the host.
///
/// In a browser host this is the item element's DOM id.
pub type ItemId = String;

/// Capability for resolving an item's current bounding box.
///
/// Boxes are in container-local space and already normalized
/// (`x1 <= x2`, `y1 <= y2`), since they come from measured layout.
pub trait BoundsResolver {
    /// The current box for `id`, or `None` if the item is not measurable
    /// right now (unmounted, display:none, mid-teardown).
    fn resolve(&self, id: &str) -> Option<Rect>;
}

/// Fixed-layout resolver over an id-to-box map.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    boxes: HashMap<ItemId, Rect>,
}

impl MapResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the box for `id`.
    pub fn insert(&mut self, id: impl Into<ItemId>, rect: Rect) {
        self.boxes.insert(id.into(), rect);
    }

    /// Remove the box for `id`, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Rect> {
        self.boxes.remove(id)
    }
}

impl BoundsResolver for MapResolver {
    fn resolve(&self, id: &str) -> Option<Rect> {
        self.boxes.get(id).copied()
    }
}

/// Adapter turning a lookup closure into a [`BoundsResolver`].
pub struct FnResolver<F>(F);

impl<F> FnResolver<F>
where
    F: Fn(&str) -> Option<Rect>,
{
    #[must_use]
    pub fn new(lookup: F) -> Self {
        Self(lookup)
    }
}

impl<F> BoundsResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<Rect>,
{
    fn resolve(&self, id: &str) -> Option<Rect> {
        (self.0)(id)
    }
}
