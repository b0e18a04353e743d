//! Outbound collaborator ports
//!
//! The engine talks to the outside world through plain function
//! references injected at construction: a playback-control collaborator
//! (seek, play, pause, device volume/brightness, speed) and a
//! feedback-overlay collaborator (visibility and live-preview
//! callbacks). Managers receive only the functions they need, which
//! keeps each one independently unit-testable and decoupled from any
//! concrete player implementation.
//!
//! All callbacks are `Rc`, not `Arc`: every gesture notification runs
//! on the UI event-processing thread and the engine holds no locks.

use std::rc::Rc;
use std::time::Duration;

use crate::gestures::FetchToken;

/// Read accessor for a piece of playback state
pub type Getter<T> = Rc<dyn Fn() -> T>;
/// Fire-and-forget call into the playback collaborator
pub type Action = Rc<dyn Fn()>;
/// Fire-and-forget call carrying an absolute target value
///
/// Because every call carries an absolute value, dropped or reordered
/// intermediate calls are harmless; the platform converges to the last
/// one applied.
pub type Apply<T> = Rc<dyn Fn(T)>;

/// Playback-control collaborator
///
/// The volume and brightness getters are asynchronous on the host side:
/// `request_volume` / `request_brightness` only initiate the fetch, and
/// the host answers later through [`resolve_volume`] /
/// [`resolve_brightness`] on the engine, echoing back the token the
/// request carried.
///
/// [`resolve_volume`]: crate::gestures::GestureCoordinator::resolve_volume
/// [`resolve_brightness`]: crate::gestures::GestureCoordinator::resolve_brightness
pub struct PlayerPort {
    pub position: Getter<Duration>,
    pub duration: Getter<Duration>,
    pub is_playing: Getter<bool>,
    pub speed: Getter<f64>,
    pub play: Action,
    pub pause: Action,
    pub seek_to: Apply<Duration>,
    pub set_volume: Apply<f64>,
    pub request_volume: Apply<FetchToken>,
    pub set_brightness: Apply<f64>,
    pub request_brightness: Apply<FetchToken>,
    pub set_speed: Apply<f64>,
}

/// Feedback-overlay collaborator
///
/// The overlay renders all visual feedback; the engine only reports
/// what changed.
pub struct OverlayPort {
    /// Controls visibility changed. The second argument is true when the
    /// transition should be instant rather than animated.
    pub controls_visibility_changed: Rc<dyn Fn(bool, bool)>,
    /// Live brightness value during a brightness drag
    pub brightness_changed: Apply<f64>,
    /// Live scrub-seek target during a seek drag, or `None` once the
    /// drag has released
    pub seek_preview: Apply<Option<Duration>>,
}
