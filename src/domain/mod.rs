//! Domain logic and core data structures
//!
//! This module contains pure gesture math that is independent of the
//! host platform and its pointer event representation.

pub mod geometry;
pub mod zone;

pub use geometry::{Delta, Point, Size};
pub use zone::Zone;
