//! Scrub-seek manager
//!
//! Converts horizontal drag distance into a live target position.
//! Playback is paused for the duration of the drag, every update only
//! publishes a preview target, and exactly one seek call is issued on
//! release so the platform is never flooded with intermediate requests.
//!
//! The distance-to-time conversion is density-independent: a configured
//! number of media seconds per physical inch of drag, so gesture feel is
//! the same regardless of pixel density.

use std::rc::Rc;
use std::time::Duration;

use log::debug;

use crate::config::GestureSettings;
use crate::player::{Action, Apply, Getter};

/// Transient per-drag state, created at commitment and consumed on release
struct SeekSession {
    /// Playback position when the drag was committed
    start: Duration,
    /// Media duration snapshot used for clamping
    media_len: Duration,
    /// Whether playback was running before the drag paused it
    was_playing: bool,
    /// Latest previewed target; the value the final seek will use
    target: Duration,
}

/// Converts horizontal drags into a single final seek with live preview
pub struct SeekManager {
    settings: Rc<GestureSettings>,
    position: Getter<Duration>,
    duration: Getter<Duration>,
    is_playing: Getter<bool>,
    play: Action,
    pause: Action,
    seek_to: Apply<Duration>,
    seek_preview: Apply<Option<Duration>>,
    session: Option<SeekSession>,
}

impl SeekManager {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: Rc<GestureSettings>,
        position: Getter<Duration>,
        duration: Getter<Duration>,
        is_playing: Getter<bool>,
        play: Action,
        pause: Action,
        seek_to: Apply<Duration>,
        seek_preview: Apply<Option<Duration>>,
    ) -> Self {
        Self {
            settings,
            position,
            duration,
            is_playing,
            play,
            pause,
            seek_to,
            seek_preview,
            session: None,
        }
    }

    /// Commitment hook: snapshot position/duration and pause playback
    pub fn start(&mut self) {
        let was_playing = (self.is_playing)();
        let start = (self.position)();
        self.session = Some(SeekSession {
            start,
            media_len: (self.duration)(),
            was_playing,
            target: start,
        });
        if was_playing {
            (self.pause)();
        }
        debug!("seek drag started at {start:?} (was_playing={was_playing})");
    }

    /// Publishes the live target for the cumulative horizontal delta
    ///
    /// No seek call is issued here; the preview callback carries the
    /// clamped target for the overlay to render.
    pub fn update(&mut self, dx: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let inches = dx / self.settings.pixels_per_inch;
        let offset = inches * self.settings.seconds_per_inch;
        let secs = (session.start.as_secs_f64() + offset)
            .clamp(0.0, session.media_len.as_secs_f64());
        session.target = Duration::from_secs_f64(secs);
        (self.seek_preview)(Some(session.target));
    }

    /// Release hook: one seek call, resume if previously playing
    ///
    /// Consuming the session makes a repeated call a no-op, so at most
    /// one seek is ever issued per drag.
    pub fn end(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        debug!("seek drag released, seeking to {:?}", session.target);
        (self.seek_to)(session.target);
        if session.was_playing {
            (self.play)();
        }
        (self.seek_preview)(None);
    }

    /// Position at which the active drag started, for preview rendering
    pub fn drag_start(&self) -> Option<Duration> {
        self.session.as_ref().map(|s| s.start)
    }

    /// Latest previewed target of the active drag
    pub fn preview_target(&self) -> Option<Duration> {
        self.session.as_ref().map(|s| s.target)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
