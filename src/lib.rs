//! Swipeplay: gesture disambiguation for video-playback surfaces
//!
//! Interprets one continuous multi-touch pointer stream into exactly one
//! of several mutually exclusive playback intents: toggle controls,
//! seek backward, play/pause, seek forward, adjust brightness, adjust
//! volume, scrub-seek, or adjust playback speed. All gestures share one
//! screen surface, so the engine commits each gesture to a single
//! manager on its first qualifying movement and never produces
//! conflicting interpretations mid-gesture.
//!
//! The engine is a pure interpretation layer: the hosting view feeds it
//! pointer and gesture notifications, and it calls out through injected
//! function references to a playback-control collaborator and a
//! feedback-overlay collaborator. It runs entirely on the UI
//! event-processing thread and holds no locks; timers are driven by the
//! host through [`GestureCoordinator::poll`].
//!
//! ```no_run
//! use std::time::Instant;
//! use swipeplay::{GestureCoordinator, GestureSettings, OverlayPort, PlayerPort, Point, Size};
//!
//! # fn connect() -> (PlayerPort, OverlayPort) { unimplemented!() }
//! let (player, overlay) = connect();
//! let mut engine = GestureCoordinator::new(GestureSettings::default(), player, overlay)?;
//!
//! // from the hosting view's input layer:
//! engine.on_gesture_start(Point::new(350.0, 300.0), 1, Size::new(400.0, 800.0));
//! engine.on_gesture_update(Point::new(350.0, 140.0), 1, Size::new(400.0, 800.0), Instant::now());
//! engine.on_gesture_end(Instant::now());
//! # Ok::<(), swipeplay::SettingsError>(())
//! ```

pub mod config;
pub mod domain;
pub mod gestures;
pub mod player;

pub use config::{GestureSettings, SettingsError};
pub use domain::{Point, Size, Zone};
pub use gestures::{Commitment, FetchToken, GestureCoordinator, GestureFeedback};
pub use player::{Action, Apply, Getter, OverlayPort, PlayerPort};
