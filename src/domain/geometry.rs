//! Core geometric types for gesture processing
//!
//! This module defines pure domain types that work exclusively with
//! logical pixels and have no knowledge of the host platform or its
//! pointer event representation.

/// A point on the control surface in logical pixels
///
/// This is the fundamental building block for gesture deltas. The origin
/// is the top-left corner of the surface, with y growing downward, so an
/// upward finger movement produces a negative delta-y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the component-wise delta from `origin` to this point
    pub fn delta_from(&self, origin: Point) -> Delta {
        Delta {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Cumulative movement of a gesture, measured from its starting point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0.0, dy: 0.0 };

    /// Returns true if either component's magnitude exceeds `threshold`
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.dx.abs() > threshold || self.dy.abs() > threshold
    }
}

/// Dimensions of the control surface in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A not-yet-measured surface
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Returns true if the surface has a usable, non-degenerate area
    ///
    /// Classification divides by surface dimensions, so a zero-area
    /// surface (layout not yet measured) must be detected before any
    /// zone or fraction math runs.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
