//! Geometry: points, the raw selection rectangle, and its normalized form.
//!
//! A [`Rect`] is a corner pair, not a top-left-plus-size box: `(x1, y1)` is
//! the drag anchor and `(x2, y2)` is the moving corner, so `x1 > x2` is a
//! legal state (the user dragged leftward). The normalized [`Bounds`] form
//! is derived on demand via [`Rect::bounds`], never stored.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in viewport or container-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point re-expressed relative to `origin`.
    ///
    /// Converts a viewport-space pointer position into container-local space
    /// given the container's current viewport origin.
    #[must_use]
    pub fn relative_to(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// A rectangle as a pair of corners in container-local space.
///
/// `(x1, y1)` is the anchor corner, `(x2, y2)` the opposite corner. Item
/// boxes produced by measured layout arrive already normalized (`x1 <= x2`,
/// `y1 <= y2`); the live selection rectangle generally does not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    /// Zero-size rectangle with both corners at `p` (the drag-start state).
    #[must_use]
    pub fn at(p: Point) -> Self {
        Self { x1: p.x, y1: p.y, x2: p.x, y2: p.y }
    }

    /// Rectangle spanning anchor `a` to moving corner `b`.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { x1: a.x, y1: a.y, x2: b.x, y2: b.y }
    }

    #[must_use]
    pub fn from_edges(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The anchor corner.
    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Replace only the moving corner, keeping the anchor.
    pub fn move_corner(&mut self, p: Point) {
        self.x2 = p.x;
        self.y2 = p.y;
    }

    /// Normalized form with non-negative width and height.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x1.min(self.x2),
            top: self.y1.min(self.y2),
            width: (self.x2 - self.x1).abs(),
            height: (self.y2 - self.y1).abs(),
        }
    }
}

/// Normalized box: top-left corner plus non-negative size.
///
/// This is the shape the presentation layer positions an overlay with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
