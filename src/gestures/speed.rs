//! Playback-speed manager
//!
//! Converts two-finger vertical drag distance into a discrete playback
//! speed, applied live on every update. The coordinator guarantees this
//! manager is only ever committed for gestures with two or more
//! pointers.

use log::debug;

use crate::player::{Apply, Getter};

/// Transient per-drag state
struct SpeedSession {
    /// Playback speed when the drag was committed
    start_speed: f64,
    /// Last value applied
    value: f64,
}

/// Converts two-finger vertical drags into stepped speed changes
pub struct SpeedManager {
    speed: Getter<f64>,
    set_speed: Apply<f64>,
    session: Option<SpeedSession>,
}

impl SpeedManager {
    /// Smallest selectable playback speed
    pub const MIN_SPEED: f64 = 0.25;
    /// Largest selectable playback speed
    pub const MAX_SPEED: f64 = 3.0;
    /// Speeds snap to multiples of this increment
    pub const STEP: f64 = 0.05;

    pub fn new(speed: Getter<f64>, set_speed: Apply<f64>) -> Self {
        Self {
            speed,
            set_speed,
            session: None,
        }
    }

    /// Commitment hook: snapshot the current playback speed
    pub fn start(&mut self) {
        let start_speed = (self.speed)();
        self.session = Some(SpeedSession {
            start_speed,
            value: start_speed,
        });
        debug!("speed drag started at {start_speed:.2}x");
    }

    /// Applies the stepped, clamped speed for the cumulative delta, live
    pub fn update(&mut self, dy: f64, surface_height: f64) {
        if surface_height <= 0.0 {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let raw = session.start_speed - dy / surface_height;
        let stepped = (raw / Self::STEP).round() * Self::STEP;
        let value = stepped.clamp(Self::MIN_SPEED, Self::MAX_SPEED);
        if value != session.value {
            session.value = value;
            (self.set_speed)(value);
        }
    }

    /// Release hook: clear transient state
    pub fn end(&mut self) {
        self.session = None;
    }

    /// Speed of the active drag, for preview rendering
    pub fn current(&self) -> Option<f64> {
        self.session.as_ref().map(|s| s.value)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
