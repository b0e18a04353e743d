//! Gesture coordination and commitment
//!
//! The coordinator is the root of the engine: it tracks the concurrent
//! pointer count, records where each gesture started, and on the first
//! qualifying movement commits the gesture to exactly one manager for
//! the rest of its lifetime. It is a pure router; it never touches
//! playback or device state itself.
//!
//! The "current commitment" is a tagged union rather than a set of
//! boolean flags, which makes the single-commitment invariant
//! structural: at any instant at most one manager can be committed
//! across the whole engine, and the slot is empty both before
//! gesture-start and after gesture-end.

use std::rc::Rc;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::config::{GestureSettings, SettingsError};
use crate::domain::{Delta, Point, Size, Zone};
use crate::gestures::level::{FetchToken, LevelManager};
use crate::gestures::seek::SeekManager;
use crate::gestures::speed::SpeedManager;
use crate::gestures::tap::TapManager;
use crate::player::{OverlayPort, PlayerPort};

/// Which manager owns the current gesture
///
/// Set at most once per gesture; a committed gesture is never
/// reclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commitment {
    Seek,
    Volume,
    Brightness,
    Speed,
}

/// Live preview of the gesture in flight, for overlay rendering
///
/// `None` outside a committed gesture. The overlay derives its icon and
/// label from the variant and renders the carried values directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureFeedback {
    Seek { start: Duration, target: Duration },
    Volume(f64),
    Brightness(f64),
    Speed(f64),
}

/// Transient state of the gesture in flight
///
/// Created at gesture start, discarded unconditionally at gesture end
/// or cancellation, so no state survives across gestures.
struct ActiveGesture {
    start: Point,
    surface: Size,
    pointer_count: u32,
    commitment: Option<Commitment>,
    /// True once the gesture crossed the movement threshold, whether or
    /// not anything committed. A gesture that moved is a drag, not a
    /// tap, even when its classification was dropped.
    moved: bool,
}

/// Root gesture router
///
/// Interprets a single continuous multi-touch pointer stream into
/// exactly one of the mutually exclusive playback intents. Inbound
/// notifications come from the hosting view's input layer; outbound
/// effects go through the injected [`PlayerPort`] and [`OverlayPort`].
pub struct GestureCoordinator {
    settings: Rc<GestureSettings>,
    /// Running pointer count from the host's raw down/up notifications.
    /// Gesture updates can lag a finger landing, so classification uses
    /// whichever of this and the event's own count is larger.
    pointer_count: u32,
    active: Option<ActiveGesture>,
    tap: TapManager,
    seek: SeekManager,
    volume: LevelManager,
    brightness: LevelManager,
    speed: SpeedManager,
}

impl GestureCoordinator {
    /// Optimistic volume baseline before the platform ever answered
    const INITIAL_VOLUME: f64 = 1.0;
    /// Optimistic brightness baseline before the platform ever answered
    const INITIAL_BRIGHTNESS: f64 = 0.5;

    /// Creates the engine with its collaborators
    ///
    /// # Arguments
    /// * `settings` - Immutable threshold configuration, validated here
    /// * `player` - Playback-control collaborator callbacks
    /// * `overlay` - Feedback-overlay collaborator callbacks
    pub fn new(
        settings: GestureSettings,
        player: PlayerPort,
        overlay: OverlayPort,
    ) -> Result<Self, SettingsError> {
        let settings = Rc::new(settings.validate()?);

        let tap = TapManager::new(
            settings.clone(),
            player.position.clone(),
            player.duration.clone(),
            player.is_playing.clone(),
            player.play.clone(),
            player.pause.clone(),
            player.seek_to.clone(),
            overlay.controls_visibility_changed.clone(),
        );
        let seek = SeekManager::new(
            settings.clone(),
            player.position.clone(),
            player.duration.clone(),
            player.is_playing.clone(),
            player.play.clone(),
            player.pause.clone(),
            player.seek_to.clone(),
            overlay.seek_preview.clone(),
        );
        let volume = LevelManager::new(
            "volume",
            Self::INITIAL_VOLUME,
            player.set_volume.clone(),
            player.request_volume.clone(),
            None,
        );
        let brightness = LevelManager::new(
            "brightness",
            Self::INITIAL_BRIGHTNESS,
            player.set_brightness.clone(),
            player.request_brightness.clone(),
            Some(overlay.brightness_changed.clone()),
        );
        let speed = SpeedManager::new(player.speed.clone(), player.set_speed.clone());

        Ok(Self {
            settings,
            pointer_count: 0,
            active: None,
            tap,
            seek,
            volume,
            brightness,
            speed,
        })
    }

    // ------------------------------------------------------------------
    // Inbound notifications
    // ------------------------------------------------------------------

    /// A pointer touched down (bookkeeping only)
    pub fn on_pointer_added(&mut self) {
        self.pointer_count += 1;
    }

    /// A pointer lifted (bookkeeping only)
    pub fn on_pointer_removed(&mut self) {
        self.pointer_count = self.pointer_count.saturating_sub(1);
    }

    /// A continuous gesture began
    ///
    /// Records the starting focal point, surface size, and pointer
    /// count. Classification is deliberately deferred: a still finger
    /// that later turns out to be a tap must not be misrouted here.
    pub fn on_gesture_start(&mut self, focal: Point, pointers: u32, surface: Size) {
        self.active = Some(ActiveGesture {
            start: focal,
            surface,
            pointer_count: pointers.max(self.pointer_count),
            commitment: None,
            moved: false,
        });
        trace!("gesture started at ({:.0}, {:.0})", focal.x, focal.y);
    }

    /// The gesture's focal point moved
    ///
    /// While uncommitted, evaluates the classification rules on the
    /// cumulative delta from the start point; once committed, forwards
    /// the raw delta to the committed manager only.
    pub fn on_gesture_update(
        &mut self,
        focal: Point,
        pointers: u32,
        surface: Size,
        now: Instant,
    ) {
        let tracked = self.pointer_count;
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.pointer_count = pointers.max(tracked);
        if surface.has_area() {
            active.surface = surface;
        }
        let delta = focal.delta_from(active.start);

        let commitment = match active.commitment {
            Some(existing) => existing,
            None => {
                if delta.exceeds(self.settings.movement_threshold) {
                    active.moved = true;
                }
                let Some(kind) = classify(
                    &self.settings,
                    active.start,
                    active.surface,
                    active.pointer_count,
                    delta,
                ) else {
                    return;
                };
                active.commitment = Some(kind);
                debug!("gesture committed to {kind:?}");
                // the start hook runs exactly once, before the
                // triggering delta is forwarded
                let surface_height = active.surface.height;
                self.start_manager(kind);
                self.tap.on_gesture_activity(now);
                self.forward(kind, delta, surface_height);
                return;
            }
        };

        let surface_height = active.surface.height;
        self.forward(commitment, delta, surface_height);
    }

    /// The gesture ended normally
    ///
    /// A committed gesture finalizes its manager; an uncommitted one
    /// that never moved resolves as a tap in its starting zone. All
    /// per-gesture state is discarded either way.
    pub fn on_gesture_end(&mut self, now: Instant) {
        let Some(active) = self.active.take() else {
            return;
        };
        match active.commitment {
            Some(kind) => self.end_manager(kind),
            None if !active.moved && active.surface.has_area() => {
                self.tap.handle_tap(active.start, active.surface, now);
            }
            None => trace!("uncommitted drag ended, dropped"),
        }
    }

    /// The host input system cancelled the gesture
    ///
    /// Cleanup is identical to a normal end, but a cancelled
    /// still-finger gesture is not synthesized into a tap.
    pub fn on_gesture_cancel(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        if let Some(kind) = active.commitment {
            debug!("gesture cancelled while committed to {kind:?}");
            self.end_manager(kind);
        }
    }

    /// Host answer to a volume fetch issued at a volume drag's start
    pub fn resolve_volume(&mut self, token: FetchToken, value: f64) {
        self.volume.resolve(token, value);
    }

    /// Host answer to a brightness fetch
    pub fn resolve_brightness(&mut self, token: FetchToken, value: f64) {
        self.brightness.resolve(token, value);
    }

    /// The playback container transitioned between playing and paused
    pub fn on_playback_state_changed(&mut self, now: Instant) {
        self.tap.on_playback_state_changed(now);
    }

    /// Fires due timers (pending single taps, controls auto-hide)
    ///
    /// # Returns
    /// The next deadline the host should call back at, if any
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        let gesture_active = self.committed().is_some();
        self.tap.poll(now, gesture_active)
    }

    // ------------------------------------------------------------------
    // Controls visibility passthrough
    // ------------------------------------------------------------------

    pub fn show_controls(&mut self, now: Instant) {
        self.tap.set_controls_visible(true, false, now);
    }

    pub fn hide_controls(&mut self, instant: bool, now: Instant) {
        self.tap.set_controls_visible(false, instant, now);
    }

    pub fn toggle_controls(&mut self, now: Instant) {
        self.tap.toggle_controls(now);
    }

    // ------------------------------------------------------------------
    // Exposed transients for preview rendering
    // ------------------------------------------------------------------

    /// The manager committed to the gesture in flight, if any
    pub fn committed(&self) -> Option<Commitment> {
        self.active.as_ref().and_then(|a| a.commitment)
    }

    pub fn controls_visible(&self) -> bool {
        self.tap.controls_visible()
    }

    /// Live scrub-seek target of an active seek drag
    pub fn seek_preview(&self) -> Option<Duration> {
        self.seek.preview_target()
    }

    /// Position at which an active seek drag started
    pub fn drag_start_position(&self) -> Option<Duration> {
        self.seek.drag_start()
    }

    /// Last known device volume
    pub fn volume(&self) -> f64 {
        self.volume.last_known()
    }

    /// Last known screen brightness
    pub fn brightness(&self) -> f64 {
        self.brightness.last_known()
    }

    /// Live speed value of an active speed drag
    pub fn speed_preview(&self) -> Option<f64> {
        self.speed.current()
    }

    /// Unified live preview of the committed gesture
    pub fn feedback(&self) -> Option<GestureFeedback> {
        match self.committed()? {
            Commitment::Seek => {
                let start = self.seek.drag_start()?;
                let target = self.seek.preview_target()?;
                Some(GestureFeedback::Seek { start, target })
            }
            Commitment::Volume => self.volume.current().map(GestureFeedback::Volume),
            Commitment::Brightness => self.brightness.current().map(GestureFeedback::Brightness),
            Commitment::Speed => self.speed.current().map(GestureFeedback::Speed),
        }
    }

    // ------------------------------------------------------------------
    // Manager dispatch
    // ------------------------------------------------------------------

    fn start_manager(&mut self, kind: Commitment) {
        match kind {
            Commitment::Seek => self.seek.start(),
            Commitment::Volume => self.volume.start(),
            Commitment::Brightness => self.brightness.start(),
            Commitment::Speed => self.speed.start(),
        }
    }

    fn forward(&mut self, kind: Commitment, delta: Delta, surface_height: f64) {
        match kind {
            Commitment::Seek => self.seek.update(delta.dx),
            Commitment::Volume => self.volume.update(delta.dy, surface_height),
            Commitment::Brightness => self.brightness.update(delta.dy, surface_height),
            Commitment::Speed => self.speed.update(delta.dy, surface_height),
        }
    }

    fn end_manager(&mut self, kind: Commitment) {
        match kind {
            Commitment::Seek => self.seek.end(),
            Commitment::Volume => self.volume.end(),
            Commitment::Brightness => self.brightness.end(),
            Commitment::Speed => self.speed.end(),
        }
    }
}

/// The ordered classification rules
///
/// Evaluated on every update of an uncommitted gesture. Returns the
/// manager to commit to, or `None` to stay uncommitted. A disabled
/// gesture type yields `None` rather than falling through to a
/// different type, so disabling never causes surprising substitutions.
fn classify(
    settings: &GestureSettings,
    start: Point,
    surface: Size,
    pointers: u32,
    delta: Delta,
) -> Option<Commitment> {
    if !surface.has_area() {
        // layout not yet measured; re-attempt on the next update
        return None;
    }
    let threshold = settings.movement_threshold;
    let in_bottom_band = start.y >= surface.height - settings.bottom_exclusion;
    let adx = delta.dx.abs();
    let ady = delta.dy.abs();

    // two-finger vertical movement is a speed gesture and nothing else
    if pointers >= 2 && ady > threshold {
        if in_bottom_band {
            return None;
        }
        return settings.enable_speed.then_some(Commitment::Speed);
    }

    // >= not >: an exact diagonal resolves horizontally
    if adx >= ady && adx > threshold {
        if in_bottom_band {
            return None;
        }
        return settings.enable_seek.then_some(Commitment::Seek);
    }

    if ady > adx && ady > threshold {
        if in_bottom_band {
            return None;
        }
        return match Zone::classify(start, surface, settings.side_fraction) {
            Zone::Right => settings.enable_volume.then_some(Commitment::Volume),
            Zone::Left => settings
                .brightness_available()
                .then_some(Commitment::Brightness),
            // vertical drags in the center are intentionally inert
            Zone::Center => None,
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::test_support::Recorder;

    fn engine(recorder: &Rc<Recorder>, settings: GestureSettings) -> GestureCoordinator {
        GestureCoordinator::new(settings, recorder.player_port(), recorder.overlay_port())
            .unwrap()
    }

    fn surface() -> Size {
        Size::new(400.0, 800.0)
    }

    fn now() -> Instant {
        Instant::now()
    }

    /// Drives start + one update in a single call
    fn drag(
        coordinator: &mut GestureCoordinator,
        start: Point,
        delta: Delta,
        pointers: u32,
    ) {
        coordinator.on_gesture_start(start, pointers, surface());
        coordinator.on_gesture_update(
            Point::new(start.x + delta.dx, start.y + delta.dy),
            pointers,
            surface(),
            now(),
        );
    }

    #[test]
    fn commitment_slot_empty_before_and_after_gesture() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        assert_eq!(engine.committed(), None);
        drag(&mut engine, Point::new(200.0, 300.0), Delta { dx: 80.0, dy: 0.0 }, 1);
        assert_eq!(engine.committed(), Some(Commitment::Seek));
        engine.on_gesture_end(now());
        assert_eq!(engine.committed(), None);
    }

    #[test]
    fn right_zone_vertical_drag_commits_to_volume() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        // start (350, 300) on 400x800: right zone, above the 100px band
        drag(&mut engine, Point::new(350.0, 300.0), Delta { dx: 0.0, dy: -160.0 }, 1);
        assert_eq!(engine.committed(), Some(Commitment::Volume));
        assert_eq!(recorder.volume_requests.borrow().len(), 1);

        // platform answers 0.5 while the session is live; the next
        // update computes clamp(0.5 + 160/800) = 0.7
        let token = recorder.volume_requests.borrow()[0];
        engine.resolve_volume(token, 0.5);
        engine.on_gesture_update(Point::new(350.0, 140.0), 1, surface(), now());
        assert_eq!(recorder.volumes.borrow().last(), Some(&0.7));

        engine.on_gesture_end(now());
        assert_eq!(engine.committed(), None);
    }

    #[test]
    fn left_zone_vertical_drag_commits_to_brightness() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        drag(&mut engine, Point::new(50.0, 300.0), Delta { dx: 0.0, dy: -160.0 }, 1);
        assert_eq!(engine.committed(), Some(Commitment::Brightness));
        assert!(!recorder.brightnesses.borrow().is_empty());
        // live values also reach the overlay's brightness feed
        assert!(!recorder.overlay_brightness.borrow().is_empty());
    }

    #[test]
    fn center_vertical_drag_is_inert() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        drag(&mut engine, Point::new(200.0, 300.0), Delta { dx: 0.0, dy: -160.0 }, 1);
        assert_eq!(engine.committed(), None);
        engine.on_gesture_end(now());

        assert!(recorder.volumes.borrow().is_empty());
        assert!(recorder.brightnesses.borrow().is_empty());
        // it moved, so it is not a tap either
        assert!(recorder.visibility.borrow().is_empty());
    }

    #[test]
    fn two_finger_vertical_drag_never_commits_to_volume() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        // right zone, which would be volume with one pointer
        drag(&mut engine, Point::new(350.0, 300.0), Delta { dx: 0.0, dy: -160.0 }, 2);
        assert_eq!(engine.committed(), Some(Commitment::Speed));
        assert!(recorder.volumes.borrow().is_empty());
        assert!(!recorder.speeds.borrow().is_empty());
    }

    #[test]
    fn disabled_speed_two_finger_drag_does_not_fall_back() {
        let recorder = Recorder::new();
        let settings = GestureSettings {
            enable_speed: false,
            ..GestureSettings::default()
        };
        let mut engine = engine(&recorder, settings);

        drag(&mut engine, Point::new(350.0, 300.0), Delta { dx: 0.0, dy: -160.0 }, 2);
        assert_eq!(engine.committed(), None);
        assert!(recorder.volumes.borrow().is_empty());
        assert!(recorder.speeds.borrow().is_empty());
    }

    #[test]
    fn bottom_band_blocks_vertical_gestures() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        // y=750 on an 800px surface with a 100px exclusion band
        for pointers in [1, 2] {
            drag(
                &mut engine,
                Point::new(350.0, 750.0),
                Delta { dx: 0.0, dy: -160.0 },
                pointers,
            );
            assert_eq!(engine.committed(), None);
            engine.on_gesture_end(now());
        }
        assert!(recorder.volumes.borrow().is_empty());
        assert!(recorder.speeds.borrow().is_empty());
    }

    #[test]
    fn bottom_band_blocks_horizontal_seek() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        drag(&mut engine, Point::new(200.0, 750.0), Delta { dx: 120.0, dy: 0.0 }, 1);
        assert_eq!(engine.committed(), None);
    }

    #[test]
    fn disabled_volume_drag_makes_no_device_calls() {
        let recorder = Recorder::new();
        let settings = GestureSettings {
            enable_volume: false,
            ..GestureSettings::default()
        };
        let mut engine = engine(&recorder, settings);

        drag(&mut engine, Point::new(350.0, 300.0), Delta { dx: 0.0, dy: -160.0 }, 1);
        assert_eq!(engine.committed(), None);
        engine.on_gesture_end(now());

        assert!(recorder.volumes.borrow().is_empty());
        assert!(recorder.volume_requests.borrow().is_empty());
    }

    #[test]
    fn brightness_unavailable_off_touch_mobile() {
        let recorder = Recorder::new();
        let settings = GestureSettings {
            touch_mobile: false,
            ..GestureSettings::default()
        };
        let mut engine = engine(&recorder, settings);

        drag(&mut engine, Point::new(50.0, 300.0), Delta { dx: 0.0, dy: -160.0 }, 1);
        assert_eq!(engine.committed(), None);
        assert!(recorder.brightnesses.borrow().is_empty());
    }

    #[test]
    fn diagonal_tie_resolves_to_seek() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        // |dx| == |dy|, both above threshold, right zone
        drag(&mut engine, Point::new(350.0, 300.0), Delta { dx: 80.0, dy: -80.0 }, 1);
        assert_eq!(engine.committed(), Some(Commitment::Seek));
    }

    #[test]
    fn committed_gesture_is_never_reclassified() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        drag(&mut engine, Point::new(350.0, 300.0), Delta { dx: 80.0, dy: 0.0 }, 1);
        assert_eq!(engine.committed(), Some(Commitment::Seek));

        // strong vertical movement afterwards stays with seek
        engine.on_gesture_update(Point::new(430.0, 0.0), 1, surface(), now());
        assert_eq!(engine.committed(), Some(Commitment::Seek));
        assert!(recorder.volumes.borrow().is_empty());
    }

    #[test]
    fn seek_drag_issues_exactly_one_seek_on_release() {
        let recorder = Recorder::new();
        *recorder.position.borrow_mut() = Duration::from_secs(30);
        let mut engine = engine(&recorder, GestureSettings::default());

        // one physical inch rightward at 20 s/inch
        drag(&mut engine, Point::new(100.0, 300.0), Delta { dx: 160.0, dy: 0.0 }, 1);
        assert_eq!(engine.seek_preview(), Some(Duration::from_secs(50)));
        assert!(recorder.seeks.borrow().is_empty());

        engine.on_gesture_end(now());
        assert_eq!(recorder.seeks.borrow().as_slice(), &[Duration::from_secs(50)]);
        assert_eq!(engine.seek_preview(), None);
    }

    #[test]
    fn sub_threshold_movement_stays_uncommitted() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        drag(&mut engine, Point::new(350.0, 300.0), Delta { dx: 5.0, dy: -10.0 }, 1);
        assert_eq!(engine.committed(), None);
    }

    #[test]
    fn near_zero_movement_gesture_resolves_as_tap() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        let t0 = now();
        engine.on_gesture_start(Point::new(200.0, 300.0), 1, surface());
        engine.on_gesture_update(Point::new(203.0, 301.0), 1, surface(), t0);
        engine.on_gesture_end(t0);

        // the single-tap effect fires once the double-tap window expires
        engine.poll(t0 + Duration::from_millis(301));
        assert_eq!(recorder.visibility.borrow().as_slice(), &[(false, false)]);
    }

    #[test]
    fn double_tap_routed_through_coordinator_zones() {
        let recorder = Recorder::new();
        *recorder.position.borrow_mut() = Duration::from_secs(60);
        let mut engine = engine(&recorder, GestureSettings::default());

        let t0 = now();
        for offset in [Duration::ZERO, Duration::from_millis(150)] {
            engine.on_gesture_start(Point::new(50.0, 300.0), 1, surface());
            engine.on_gesture_end(t0 + offset);
        }
        assert_eq!(recorder.seeks.borrow().as_slice(), &[Duration::from_secs(50)]);
    }

    #[test]
    fn zero_area_surface_defers_classification() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        engine.on_gesture_start(Point::new(350.0, 300.0), 1, Size::ZERO);
        engine.on_gesture_update(Point::new(350.0, 140.0), 1, Size::ZERO, now());
        assert_eq!(engine.committed(), None);

        // re-attempted once the surface is measured
        engine.on_gesture_update(Point::new(350.0, 140.0), 1, surface(), now());
        assert_eq!(engine.committed(), Some(Commitment::Volume));
    }

    #[test]
    fn cancel_cleans_up_committed_manager() {
        let recorder = Recorder::new();
        *recorder.playing.borrow_mut() = true;
        let mut engine = engine(&recorder, GestureSettings::default());

        drag(&mut engine, Point::new(100.0, 300.0), Delta { dx: 120.0, dy: 0.0 }, 1);
        assert_eq!(*recorder.pauses.borrow(), 1);

        engine.on_gesture_cancel();
        assert_eq!(engine.committed(), None);
        // playback resumed, session finalized
        assert_eq!(*recorder.plays.borrow(), 1);
    }

    #[test]
    fn cancel_never_synthesizes_a_tap() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        let t0 = now();
        engine.on_gesture_start(Point::new(200.0, 300.0), 1, surface());
        engine.on_gesture_cancel();
        engine.poll(t0 + Duration::from_secs(1));
        assert!(recorder.visibility.borrow().is_empty());
    }

    #[test]
    fn tracked_pointer_count_backs_up_stale_events() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        engine.on_pointer_added();
        engine.on_pointer_added();
        // the gesture event still reports one pointer
        drag(&mut engine, Point::new(350.0, 300.0), Delta { dx: 0.0, dy: -160.0 }, 1);
        assert_eq!(engine.committed(), Some(Commitment::Speed));

        engine.on_gesture_end(now());
        engine.on_pointer_removed();
        engine.on_pointer_removed();
    }

    #[test]
    fn speed_values_live_stepped_and_clamped() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        drag(&mut engine, Point::new(200.0, 600.0), Delta { dx: 0.0, dy: -400.0 }, 2);
        // 1.0 + 400/800 = 1.5
        assert_eq!(recorder.speeds.borrow().last(), Some(&1.5));
        assert_eq!(engine.speed_preview(), Some(1.5));

        engine.on_gesture_update(Point::new(200.0, -5000.0), 2, surface(), now());
        assert_eq!(recorder.speeds.borrow().last(), Some(&3.0));

        engine.on_gesture_end(now());
        assert_eq!(engine.speed_preview(), None);
    }

    #[test]
    fn feedback_reflects_the_committed_gesture() {
        let recorder = Recorder::new();
        *recorder.position.borrow_mut() = Duration::from_secs(30);
        let mut engine = engine(&recorder, GestureSettings::default());

        assert_eq!(engine.feedback(), None);
        drag(&mut engine, Point::new(100.0, 300.0), Delta { dx: 160.0, dy: 0.0 }, 1);
        assert_eq!(
            engine.feedback(),
            Some(GestureFeedback::Seek {
                start: Duration::from_secs(30),
                target: Duration::from_secs(50),
            })
        );
        engine.on_gesture_end(now());
        assert_eq!(engine.feedback(), None);
    }

    #[test]
    fn update_without_start_is_ignored() {
        let recorder = Recorder::new();
        let mut engine = engine(&recorder, GestureSettings::default());

        engine.on_gesture_update(Point::new(200.0, 300.0), 1, surface(), now());
        engine.on_gesture_end(now());
        assert_eq!(engine.committed(), None);
    }

    #[test]
    fn invalid_settings_rejected_at_construction() {
        let recorder = Recorder::new();
        let settings = GestureSettings {
            side_fraction: 0.9,
            ..GestureSettings::default()
        };
        assert!(GestureCoordinator::new(
            settings,
            recorder.player_port(),
            recorder.overlay_port()
        )
        .is_err());
    }
}
