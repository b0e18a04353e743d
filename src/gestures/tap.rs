//! Tap classification and controls auto-hide
//!
//! Near-zero-movement gestures arrive here from the coordinator once
//! their gesture ends uncommitted. A single tap toggles the controls;
//! a second tap in the same zone within the double-tap interval promotes
//! the pair into the zone's double-tap effect instead (left seeks
//! backward, center toggles play/pause, right seeks forward).
//!
//! This manager also owns the controls auto-hide timer. The engine has
//! no internal threads, so expiry is driven by the host through
//! [`TapManager::poll`], which reports the next deadline the host
//! should wake up for. This mirrors the poll-style timeout used for
//! modal selection elsewhere in the codebase family this engine grew
//! out of.

use std::rc::Rc;
use std::time::{Duration, Instant};

use log::debug;

use crate::config::GestureSettings;
use crate::domain::{Point, Size, Zone};
use crate::player::{Action, Apply, Getter};

/// The most recent unconsumed tap, waiting to become a single or double
struct TapWindow {
    at: Instant,
    zone: Zone,
}

/// Classifies taps and drives controls visibility
pub struct TapManager {
    settings: Rc<GestureSettings>,
    position: Getter<Duration>,
    duration: Getter<Duration>,
    is_playing: Getter<bool>,
    play: Action,
    pause: Action,
    seek_to: Apply<Duration>,
    controls_visibility_changed: Rc<dyn Fn(bool, bool)>,
    window: Option<TapWindow>,
    /// When the pending single-tap effect fires, if one is scheduled
    single_tap_due: Option<Instant>,
    controls_visible: bool,
    hide_due: Option<Instant>,
}

impl TapManager {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: Rc<GestureSettings>,
        position: Getter<Duration>,
        duration: Getter<Duration>,
        is_playing: Getter<bool>,
        play: Action,
        pause: Action,
        seek_to: Apply<Duration>,
        controls_visibility_changed: Rc<dyn Fn(bool, bool)>,
    ) -> Self {
        Self {
            settings,
            position,
            duration,
            is_playing,
            play,
            pause,
            seek_to,
            controls_visibility_changed,
            window: None,
            single_tap_due: None,
            controls_visible: true,
            hide_due: None,
        }
    }

    /// Resolves a tap that the coordinator routed here
    ///
    /// # Arguments
    /// * `point` - The gesture's starting focal point
    /// * `surface` - Surface size at gesture start
    /// * `now` - Event timestamp from the host
    pub fn handle_tap(&mut self, point: Point, surface: Size, now: Instant) {
        let zone = Zone::classify(point, surface, self.settings.side_fraction);

        let promoted = match &self.window {
            Some(window)
                if window.zone == zone
                    && now.duration_since(window.at) <= self.settings.double_tap_interval =>
            {
                true
            }
            _ => false,
        };

        if promoted {
            // the pending single tap is consumed by the pair
            self.window = None;
            self.single_tap_due = None;
            debug!("double tap in {zone:?} zone");
            self.fire_double_tap(zone, now);
        } else {
            self.window = Some(TapWindow { at: now, zone });
            self.single_tap_due = Some(now + self.settings.double_tap_interval);
        }
        self.restart_auto_hide(now);
    }

    fn fire_double_tap(&mut self, zone: Zone, now: Instant) {
        match zone {
            Zone::Left => self.seek_by(-self.settings.double_tap_seek.as_secs_f64()),
            Zone::Right => self.seek_by(self.settings.double_tap_seek.as_secs_f64()),
            Zone::Center => {
                if (self.is_playing)() {
                    (self.pause)();
                } else {
                    (self.play)();
                }
                self.on_playback_state_changed(now);
            }
        }
    }

    fn seek_by(&self, offset_secs: f64) {
        let media_len = (self.duration)();
        let target = ((self.position)().as_secs_f64() + offset_secs)
            .clamp(0.0, media_len.as_secs_f64());
        (self.seek_to)(Duration::from_secs_f64(target));
    }

    /// Shows or hides the controls
    ///
    /// # Arguments
    /// * `visible` - Desired visibility
    /// * `instant` - Skip the animated transition
    /// * `now` - Timestamp used to arm the auto-hide timer
    pub fn set_controls_visible(&mut self, visible: bool, instant: bool, now: Instant) {
        if self.controls_visible != visible {
            self.controls_visible = visible;
            (self.controls_visibility_changed)(visible, instant);
        }
        self.restart_auto_hide(now);
    }

    pub fn toggle_controls(&mut self, now: Instant) {
        self.set_controls_visible(!self.controls_visible, false, now);
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Re-arms or disarms the auto-hide timer
    ///
    /// The timer only runs while the controls are visible during active
    /// playback; pausing keeps the controls up.
    fn restart_auto_hide(&mut self, now: Instant) {
        if self.settings.auto_hide && self.controls_visible && (self.is_playing)() {
            self.hide_due = Some(now + self.settings.auto_hide_delay);
        } else {
            self.hide_due = None;
        }
    }

    /// A playback play/pause transition resets the auto-hide timer
    pub fn on_playback_state_changed(&mut self, now: Instant) {
        self.restart_auto_hide(now);
    }

    /// A gesture commitment counts as user activity
    pub fn on_gesture_activity(&mut self, now: Instant) {
        self.restart_auto_hide(now);
    }

    /// Fires any due timers and returns the next deadline
    ///
    /// # Arguments
    /// * `now` - Current time
    /// * `gesture_active` - True while any manager holds a drag session;
    ///   auto-hide never fires mid-drag and is deferred instead
    ///
    /// # Returns
    /// The earliest upcoming deadline the host should poll again at,
    /// or None when no timers are armed
    pub fn poll(&mut self, now: Instant, gesture_active: bool) -> Option<Instant> {
        if let Some(due) = self.single_tap_due
            && now >= due
        {
            // the window expired unconsumed: the stored tap is a single
            self.single_tap_due = None;
            self.window = None;
            debug!("single tap, toggling controls");
            self.toggle_controls(now);
        }

        if let Some(due) = self.hide_due
            && now >= due
        {
            if gesture_active {
                self.hide_due = Some(now + self.settings.auto_hide_delay);
            } else {
                self.hide_due = None;
                self.controls_visible = false;
                // animated, never instant, when hiding on timeout
                (self.controls_visibility_changed)(false, false);
                debug!("controls auto-hidden");
            }
        }

        match (self.single_tap_due, self.hide_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
}
