//! WebAssembly exports for plain JavaScript hosts.
//!
//! Rust WASM frontends consume [`crate::engine::Engine`] directly as an
//! rlib; this module is the `wasm-bindgen` surface for everyone else. A JS
//! host constructs a [`SelectionZone`] over its container element, forwards
//! raw pointer events, and renders the overlay from the returned updates.
//!
//! Structured results cross the boundary as JSON strings; options come in
//! the same way (`{"collision": "contained"}`).

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::engine::{Engine, Options};
use crate::geom::Point;

/// A marquee selection zone bound to a container element.
#[wasm_bindgen]
pub struct SelectionZone {
    engine: Engine,
}

#[wasm_bindgen]
impl SelectionZone {
    /// Create a zone over `container`. `options` is a JSON object string;
    /// pass `"{}"` for defaults.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `options` is not a valid options object.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: &str) -> Result<SelectionZone, JsValue> {
        let options: Options = serde_json::from_str(options)
            .map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?;
        Ok(Self { engine: Engine::with_options(container, options) })
    }

    /// Forward a pointer-down at client coordinates. Returns whether a drag
    /// began; it does not when the container is not currently measurable.
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> bool {
        self.engine.on_pointer_down(Point::new(client_x, client_y))
    }

    /// Forward a pointer-move at client coordinates against `candidates`
    /// (item element ids).
    ///
    /// Returns the current update as a JSON string of the form
    /// `{"selection": {...}, "selected": [...]}`, or `None` while idle.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the update cannot be serialized.
    pub fn pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        candidates: Vec<String>,
    ) -> Result<Option<String>, JsValue> {
        let Some(update) = self
            .engine
            .on_pointer_move(Point::new(client_x, client_y), &candidates)
        else {
            return Ok(None);
        };
        let json = serde_json::to_string(&update)
            .map_err(|e| JsValue::from_str(&format!("serialize update: {e}")))?;
        Ok(Some(json))
    }

    /// Forward a pointer-up. Returns the final selection rectangle as a JSON
    /// string if a drag was in progress; a pointer-up while idle returns
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the rectangle cannot be serialized.
    pub fn pointer_up(&mut self) -> Result<Option<String>, JsValue> {
        let Some(rect) = self.engine.on_pointer_up() else {
            return Ok(None);
        };
        let json = serde_json::to_string(&rect)
            .map_err(|e| JsValue::from_str(&format!("serialize selection: {e}")))?;
        Ok(Some(json))
    }

    /// Forward a pointer-up, invoking `finalize` with the final rectangle
    /// JSON before the drag state resets. `finalize` is not invoked while
    /// idle.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the rectangle cannot be serialized or `finalize`
    /// throws.
    pub fn pointer_up_with(
        &mut self,
        finalize: &js_sys::Function,
    ) -> Result<Option<String>, JsValue> {
        let mut outcome: Result<Option<String>, JsValue> = Ok(None);
        self.engine.on_pointer_up_with(|rect| {
            outcome = serde_json::to_string(rect)
                .map_err(|e| JsValue::from_str(&format!("serialize selection: {e}")))
                .and_then(|json| {
                    finalize.call1(&JsValue::NULL, &JsValue::from_str(&json))?;
                    Ok(Some(json))
                });
        });
        outcome
    }

    /// Abandon the active drag without a pointer-up (pointer capture lost,
    /// window blur).
    pub fn cancel(&mut self) {
        self.engine.cancel();
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }
}
