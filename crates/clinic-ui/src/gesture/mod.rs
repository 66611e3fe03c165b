//! Gesture translation module
//!
//! Turns continuous pointer/touch drags and wheel deltas into discrete
//! next/previous commands.

mod drag;
mod translator;
mod wheel;

pub use drag::DragState;
pub use translator::{GestureResult, GestureTranslator};
pub use wheel::WheelGate;

use serde::Serialize;

/// Drag distance in pixels that counts as a swipe
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Wheel deltas smaller than this are ignored
pub const DEFAULT_WHEEL_DEADZONE_PX: f32 = 10.0;

/// Silence after which a new wheel gesture may fire again
pub const DEFAULT_WHEEL_QUIET_MS: f64 = 250.0;

/// Direction of a recognised gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Advance to the next slide
    Next,
    /// Go back to the previous slide
    Previous,
}

/// Receiver of translated gestures
///
/// The translator never touches navigation state directly; everything it
/// recognises is delivered through these calls.
pub trait GestureSink {
    /// A drag began (autoplay should pause)
    fn drag_started(&mut self);
    /// A drag finished, swipe or not (autoplay should resume)
    fn drag_ended(&mut self);
    /// Navigate one slide in `direction`
    fn navigate(&mut self, direction: Direction);
}
