//! Vertical-drag level manager, shared by volume and brightness
//!
//! Both side-edge gestures map vertical drag distance onto a [0, 1]
//! device level and differ only in which platform calls they are wired
//! to, so one manager serves both. The baseline is seeded optimistically
//! from the last locally cached value and corrected in place if the
//! asynchronous platform fetch resolves while the same session is still
//! active; a small perceptible jump on correction is the accepted
//! tradeoff for never blocking the gesture.

use log::debug;

use crate::player::Apply;

/// Identifies which session's fetch a host answer belongs to
///
/// Issued alongside every fetch request and echoed back by the host
/// with the fetched value. An answer whose token no longer matches the
/// active session is discarded, so a continuation from an ended gesture
/// can never corrupt a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Transient per-drag state for one level gesture
struct LevelSession {
    /// Value the drag distance is added to; corrected by a live fetch
    baseline: f64,
    /// Last value applied to the device
    value: f64,
    /// Generation this session was created under
    generation: u64,
}

/// Converts vertical drags in a side zone into live device-level changes
pub struct LevelManager {
    /// "volume" or "brightness", for log lines only
    label: &'static str,
    apply: Apply<f64>,
    request_current: Apply<FetchToken>,
    /// Extra live-value callback (the overlay's brightness feed); `None`
    /// for volume, whose overlay reads the exposed transient instead
    on_change: Option<Apply<f64>>,
    /// Last known device level, surviving across gestures as the seed
    /// for the next optimistic baseline
    cached: f64,
    /// Bumped on every session start
    generation: u64,
    session: Option<LevelSession>,
}

impl LevelManager {
    pub fn new(
        label: &'static str,
        initial: f64,
        apply: Apply<f64>,
        request_current: Apply<FetchToken>,
        on_change: Option<Apply<f64>>,
    ) -> Self {
        Self {
            label,
            apply,
            request_current,
            on_change,
            cached: initial.clamp(0.0, 1.0),
            generation: 0,
            session: None,
        }
    }

    /// Commitment hook: seed the baseline optimistically and ask the
    /// platform for the authoritative current value
    pub fn start(&mut self) {
        self.generation += 1;
        self.session = Some(LevelSession {
            baseline: self.cached,
            value: self.cached,
            generation: self.generation,
        });
        (self.request_current)(FetchToken(self.generation));
        debug!(
            "{} drag started, optimistic baseline {:.2}",
            self.label, self.cached
        );
    }

    /// Host answer to an earlier fetch request
    ///
    /// Applied only when the session that issued the fetch is still the
    /// active one. A host that never answers leaves the gesture on its
    /// optimistic baseline, which is preferred over aborting it.
    pub fn resolve(&mut self, token: FetchToken, value: f64) {
        match self.session.as_mut() {
            Some(session) if session.generation == token.0 => {
                session.baseline = value.clamp(0.0, 1.0);
                debug!("{} baseline corrected to {:.2}", self.label, session.baseline);
            }
            _ => {
                debug!("{} fetch resolved after its session ended, discarded", self.label);
            }
        }
    }

    /// Applies the level for the cumulative vertical delta, live
    ///
    /// Upward movement is negative delta-y, which must increase the
    /// value, hence the sign inversion.
    pub fn update(&mut self, dy: f64, surface_height: f64) {
        if surface_height <= 0.0 {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let value = (session.baseline - dy / surface_height).clamp(0.0, 1.0);
        session.value = value;
        self.cached = value;
        (self.apply)(value);
        if let Some(on_change) = &self.on_change {
            (on_change)(value);
        }
    }

    /// Release hook: clear transient state
    ///
    /// No final commit call is needed, every intermediate value was
    /// already applied.
    pub fn end(&mut self) {
        self.session = None;
    }

    /// Level of the active drag, for preview rendering
    pub fn current(&self) -> Option<f64> {
        self.session.as_ref().map(|s| s.value)
    }

    /// Last known device level, inside or outside a gesture
    pub fn last_known(&self) -> f64 {
        self.cached
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
