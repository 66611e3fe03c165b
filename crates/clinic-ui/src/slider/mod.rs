//! Slide navigation module
//!
//! Index state over a fixed set of slides, the autoplay schedule, the
//! keyboard map and the card layout helpers.

mod autoplay;
mod keyboard;
mod layout;
mod navigator;

pub use autoplay::AutoplaySchedule;
pub use keyboard::command_for_key;
pub use layout::{card_pose, position_label, slide_stride, track_offset, CardPose};
pub use navigator::{SlideNavigator, SliderError};

/// Default autoplay interval in milliseconds
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5000;

/// A discrete navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideCommand {
    /// Advance one slide (wraps)
    Next,
    /// Go back one slide (wraps)
    Previous,
    /// Jump to the first slide
    First,
    /// Jump to the last slide
    Last,
    /// Jump to an index (clamped)
    GoTo(i64),
}
