//! DOM measurement: container origin and item bounding boxes.
//!
//! This module is the only place that touches `web_sys`. It reads geometry
//! from the live document and converts it into container-local space — it
//! does not mutate the DOM or any engine state. Everything here degrades to
//! `None` when an element is not measurable; the engine treats missing
//! geometry as absence, never as an error.

use web_sys::{Document, HtmlElement};

use crate::geom::{Point, Rect};
use crate::item::BoundsResolver;

/// Current viewport-space origin (top-left corner) of `container`.
///
/// Returns `None` when the element is not connected to a document, which is
/// what keeps a pointer-down over an unmounted container from starting a
/// drag.
#[must_use]
pub fn container_origin(container: &HtmlElement) -> Option<Point> {
    if !container.is_connected() {
        return None;
    }
    let rect = container.get_bounding_client_rect();
    Some(Point::new(rect.left(), rect.top()))
}

/// Resolves item boxes by element id against the live document.
///
/// Captures the container origin at construction. [`crate::engine::Engine`]
/// builds a fresh resolver per move event, so both the origin and every item
/// box reflect the current layout even while items reflow or animate
/// mid-drag.
pub struct DomResolver {
    document: Document,
    origin: Point,
}

impl DomResolver {
    /// Returns `None` when no global `window`/`document` is available.
    #[must_use]
    pub fn new(origin: Point) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document, origin })
    }
}

impl BoundsResolver for DomResolver {
    fn resolve(&self, id: &str) -> Option<Rect> {
        let element = self.document.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        Some(Rect::from_edges(
            rect.left() - self.origin.x,
            rect.top() - self.origin.y,
            rect.right() - self.origin.x,
            rect.bottom() - self.origin.y,
        ))
    }
}
