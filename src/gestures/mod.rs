//! Gesture managers and the coordinating router
//!
//! Leaf managers each own one intent (tap, scrub-seek, volume,
//! brightness, playback speed); the coordinator disambiguates the
//! pointer stream and commits each gesture to exactly one of them.

pub mod coordinator;
pub mod level;
pub mod seek;
pub mod speed;
pub mod tap;

pub use coordinator::{Commitment, GestureCoordinator, GestureFeedback};
pub use level::FetchToken;
