//! Top-level engine: drag-state transitions and per-move selection output.
//!
//! [`EngineCore`] holds all logic that doesn't depend on the browser: it
//! takes pointer positions together with a caller-supplied container origin,
//! maintains the drag state machine, and evaluates candidates on every move.
//! [`Engine`] wraps it with a live container element and re-measures the
//! origin from the DOM on each event, so browser hosts and headless
//! harnesses drive the same core.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};
use web_sys::HtmlElement;

use crate::dom::{self, DomResolver};
use crate::geom::{Point, Rect};
use crate::hit::{self, CollisionPolicy};
use crate::input::DragState;
use crate::item::{BoundsResolver, ItemId};

/// Engine configuration recognized at construction time.
///
/// Deserializes with per-field defaults, so a host can pass `{}` or
/// `{"collision": "contained"}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Collision policy applied on every move evaluation.
    pub collision: CollisionPolicy,
}

/// Emitted on every pointer-move while a drag is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionUpdate {
    /// The raw selection rectangle, anchor corner first. The presentation
    /// layer derives the overlay box from it via [`Rect::bounds`].
    pub selection: Rect,
    /// Ids of the currently-selected items, in candidate-list order.
    pub selected: Vec<ItemId>,
}

/// Core engine state — all logic that doesn't depend on the DOM.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub options: Options,
    pub state: DragState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options, state: DragState::Idle }
    }

    // --- Input events ---

    /// Begin a drag at `point`, with the container currently at `origin`
    /// (both in viewport space).
    ///
    /// The anchor and moving corner are both set to `point - origin`, a
    /// zero-size rectangle. A pointer-down during an active drag restarts
    /// the drag from the new anchor.
    pub fn pointer_down(&mut self, point: Point, origin: Point) {
        let local = point.relative_to(origin);
        log::trace!("drag started at ({}, {})", local.x, local.y);
        self.state = DragState::Dragging { selection: Rect::at(local) };
    }

    /// Move the drag's moving corner to `point - origin` and re-evaluate
    /// `candidates` against the updated rectangle.
    ///
    /// `origin` should be re-measured by the caller per event, not cached,
    /// so the rectangle stays anchored through container scroll or resize.
    /// Returns `None` while idle (stray moves outside a drag are ignored).
    pub fn pointer_move<R>(
        &mut self,
        point: Point,
        origin: Point,
        candidates: &[ItemId],
        boxes: &R,
    ) -> Option<SelectionUpdate>
    where
        R: BoundsResolver + ?Sized,
    {
        let DragState::Dragging { selection } = &mut self.state else {
            return None;
        };
        selection.move_corner(point.relative_to(origin));

        let selection = *selection;
        let selected = hit::evaluate(&selection, candidates, boxes, self.options.collision);
        Some(SelectionUpdate { selection, selected })
    }

    /// End the drag. Returns the final rectangle if a drag was in progress;
    /// a pointer-up while idle is an idempotent no-op.
    pub fn pointer_up(&mut self) -> Option<Rect> {
        self.pointer_up_with(|_| {})
    }

    /// Like [`pointer_up`](Self::pointer_up), but runs `finalize` with the
    /// final rectangle before the state resets. `finalize` does not run on
    /// an idle pointer-up.
    pub fn pointer_up_with<F>(&mut self, finalize: F) -> Option<Rect>
    where
        F: FnOnce(&Rect),
    {
        let DragState::Dragging { selection } = &self.state else {
            return None;
        };
        let selection = *selection;
        finalize(&selection);

        log::trace!("drag finished");
        self.state = DragState::Idle;
        Some(selection)
    }

    /// Abandon the active drag without a pointer-up (container lost capture,
    /// window blur). No finalize hook runs. A no-op while idle.
    pub fn cancel(&mut self) {
        if self.state.is_dragging() {
            log::trace!("drag cancelled");
            self.state = DragState::Idle;
        }
    }

    // --- Queries ---

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// The live selection rectangle, if a drag is in progress.
    #[must_use]
    pub fn selection(&self) -> Option<&Rect> {
        self.state.selection()
    }
}

/// The full selection engine. Wraps [`EngineCore`] and owns the container
/// element it measures against.
pub struct Engine {
    container: HtmlElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine over `container` with default options.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self::with_options(container, Options::default())
    }

    #[must_use]
    pub fn with_options(container: HtmlElement, options: Options) -> Self {
        Self { container, core: EngineCore::with_options(options) }
    }

    // --- Input events ---

    /// Pointer-down at viewport coordinates. Returns whether a drag began;
    /// it does not when the container is not currently measurable.
    pub fn on_pointer_down(&mut self, client: Point) -> bool {
        let Some(origin) = dom::container_origin(&self.container) else {
            return false;
        };
        self.core.pointer_down(client, origin);
        true
    }

    /// Pointer-move at viewport coordinates, evaluated against `candidates`
    /// (item element ids).
    ///
    /// The container origin and every candidate box are measured fresh from
    /// the DOM on each call.
    pub fn on_pointer_move(
        &mut self,
        client: Point,
        candidates: &[ItemId],
    ) -> Option<SelectionUpdate> {
        let origin = dom::container_origin(&self.container)?;
        let resolver = DomResolver::new(origin)?;
        self.core.pointer_move(client, origin, candidates, &resolver)
    }

    /// Pointer-up. Returns the final rectangle if a drag was in progress.
    pub fn on_pointer_up(&mut self) -> Option<Rect> {
        self.core.pointer_up()
    }

    /// Pointer-up running `finalize` with the final rectangle before the
    /// state resets.
    pub fn on_pointer_up_with<F>(&mut self, finalize: F) -> Option<Rect>
    where
        F: FnOnce(&Rect),
    {
        self.core.pointer_up_with(finalize)
    }

    /// Abandon the active drag without a pointer-up.
    pub fn cancel(&mut self) {
        self.core.cancel();
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.is_dragging()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Rect> {
        self.core.selection()
    }
}
