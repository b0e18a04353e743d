//! Configuration surface for the gesture engine
//!
//! Settings are supplied once at construction and never mutated by the
//! engine itself. This module concentrates the knobs shared between the
//! coordinator and the individual gesture managers.

pub mod gestures;

pub use gestures::{GestureSettings, SettingsError};
