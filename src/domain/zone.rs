//! Horizontal zone classification
//!
//! This module decides which horizontal region of the surface a gesture
//! started in. Both taps and side-edge vertical drags are routed by the
//! same zone boundaries so the two behaviors can never disagree about
//! where "left" ends.

use crate::domain::geometry::{Point, Size};

/// Horizontal region of the control surface
///
/// Derived from a gesture's starting x position relative to the surface
/// width and the configured side-area fraction. With width 400 and
/// fraction 0.4, the left zone is x in [0, 160), the right zone is
/// x in (240, 400], and everything between is center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Left,
    Center,
    Right,
}

impl Zone {
    /// Classifies a starting point into a zone
    ///
    /// # Arguments
    /// * `point` - Gesture starting point in logical pixels
    /// * `surface` - Current surface dimensions
    /// * `side_fraction` - Fraction of the width on each edge counted as
    ///   a side zone (0.4 means the outer 40% on each side)
    pub fn classify(point: Point, surface: Size, side_fraction: f64) -> Self {
        let side = surface.width * side_fraction;
        if point.x < side {
            Zone::Left
        } else if point.x > surface.width - side {
            Zone::Right
        } else {
            Zone::Center
        }
    }
}
