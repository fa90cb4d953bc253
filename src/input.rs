//! Input model: the drag gesture state machine.
//!
//! [`DragState`] is the active gesture being tracked between pointer-down
//! and pointer-up. The selection rectangle lives inside the `Dragging`
//! variant: a rectangle exists exactly while a drag is in progress.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Rect;

/// Internal state for the drag state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    /// No drag in progress; waiting for the next pointer-down.
    Idle,
    /// A marquee drag is in progress.
    Dragging {
        /// The live selection rectangle, anchor corner first.
        selection: Rect,
    },
}

impl DragState {
    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The live selection rectangle, if a drag is in progress.
    #[must_use]
    pub fn selection(&self) -> Option<&Rect> {
        match self {
            Self::Idle => None,
            Self::Dragging { selection } => Some(selection),
        }
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}
