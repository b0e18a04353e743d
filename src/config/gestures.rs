use std::time::Duration;
use thiserror::Error;

/// Immutable gesture configuration, supplied once at engine construction
///
/// The engine never mutates these values; hosts that want different
/// behavior construct a new engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSettings {
    /// Per-gesture enable flags. A disabled gesture type is never
    /// selected and never substituted with another type.
    pub enable_seek: bool,
    pub enable_volume: bool,
    pub enable_brightness: bool,
    pub enable_speed: bool,
    /// Minimum movement in logical pixels before a drag is treated as
    /// intentional on either axis
    pub movement_threshold: f64,
    /// Height in logical pixels of the reserved band at the bottom of
    /// the surface (over the toolbar) where drags never activate
    pub bottom_exclusion: f64,
    /// Fraction of the surface width on each edge counted as a side
    /// zone, shared by double-tap routing and vertical side drags
    pub side_fraction: f64,
    /// Window within which a second same-zone tap becomes a double tap
    pub double_tap_interval: Duration,
    /// Amount seeked by a double tap in the left or right zone
    pub double_tap_seek: Duration,
    /// Scrub-seek conversion rate: seconds of media per physical inch
    /// of horizontal drag
    pub seconds_per_inch: f64,
    /// Logical pixels per physical inch of the display, used to keep the
    /// scrub-seek feel density-independent
    pub pixels_per_inch: f64,
    /// Whether controls hide automatically during uninterrupted playback
    pub auto_hide: bool,
    /// Delay before visible controls are hidden
    pub auto_hide_delay: Duration,
    /// True on touch-mobile platforms. Brightness gestures are disabled
    /// outright elsewhere, independent of `enable_brightness`.
    pub touch_mobile: bool,
}

impl GestureSettings {
    pub const MAX_SIDE_FRACTION: f64 = 0.5;
    pub const DEFAULT_MOVEMENT_THRESHOLD: f64 = 30.0;
    pub const DEFAULT_BOTTOM_EXCLUSION: f64 = 100.0;
    pub const DEFAULT_SIDE_FRACTION: f64 = 0.4;
    pub const DEFAULT_SECONDS_PER_INCH: f64 = 20.0;
    pub const DEFAULT_PIXELS_PER_INCH: f64 = 160.0;

    /// Validates the settings, returning them unchanged on success
    ///
    /// Called once by the engine constructor. Validation failures are
    /// the only errors this crate surfaces; nothing inside the gesture
    /// path itself is fatal.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if !(0.0..=Self::MAX_SIDE_FRACTION).contains(&self.side_fraction) {
            return Err(SettingsError::SideFractionOutOfRange {
                value: self.side_fraction,
            });
        }
        if !self.movement_threshold.is_finite() || self.movement_threshold < 0.0 {
            return Err(SettingsError::InvalidThreshold {
                name: "movement_threshold",
                value: self.movement_threshold,
            });
        }
        if !self.bottom_exclusion.is_finite() || self.bottom_exclusion < 0.0 {
            return Err(SettingsError::InvalidThreshold {
                name: "bottom_exclusion",
                value: self.bottom_exclusion,
            });
        }
        if !self.seconds_per_inch.is_finite() || self.seconds_per_inch <= 0.0 {
            return Err(SettingsError::InvalidThreshold {
                name: "seconds_per_inch",
                value: self.seconds_per_inch,
            });
        }
        if !self.pixels_per_inch.is_finite() || self.pixels_per_inch <= 0.0 {
            return Err(SettingsError::InvalidThreshold {
                name: "pixels_per_inch",
                value: self.pixels_per_inch,
            });
        }
        Ok(self)
    }

    /// True when brightness gestures can ever be selected
    pub fn brightness_available(&self) -> bool {
        self.enable_brightness && self.touch_mobile
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            enable_seek: true,
            enable_volume: true,
            enable_brightness: true,
            enable_speed: true,
            movement_threshold: Self::DEFAULT_MOVEMENT_THRESHOLD,
            bottom_exclusion: Self::DEFAULT_BOTTOM_EXCLUSION,
            side_fraction: Self::DEFAULT_SIDE_FRACTION,
            double_tap_interval: Duration::from_millis(300),
            double_tap_seek: Duration::from_secs(10),
            seconds_per_inch: Self::DEFAULT_SECONDS_PER_INCH,
            pixels_per_inch: Self::DEFAULT_PIXELS_PER_INCH,
            auto_hide: true,
            auto_hide_delay: Duration::from_secs(4),
            touch_mobile: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("side fraction {value} outside [0.0, 0.5]")]
    SideFractionOutOfRange { value: f64 },
    #[error("{name} has invalid value {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}
