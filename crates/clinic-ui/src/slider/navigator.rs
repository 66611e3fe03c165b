//! Current slide index and autoplay pause flag

use core::fmt;

use super::SlideCommand;

/// Errors constructing a navigator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderError {
    /// A slide set must contain at least one slide
    NoSlides,
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderError::NoSlides => write!(f, "slide set is empty"),
        }
    }
}

impl std::error::Error for SliderError {}

/// Owns the current index into a fixed-size slide set
///
/// The index is always in `[0, total - 1]`: stepping wraps around and
/// direct jumps are clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideNavigator {
    total: usize,
    current: usize,
    autoplay_paused: bool,
}

impl SlideNavigator {
    /// Create a navigator at slide 0 with autoplay running
    pub fn new(total: usize) -> Result<Self, SliderError> {
        if total == 0 {
            return Err(SliderError::NoSlides);
        }
        Ok(Self {
            total,
            current: 0,
            autoplay_paused: false,
        })
    }

    /// Number of slides
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Current slide index
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether autoplay has been paused
    #[inline]
    pub fn is_autoplay_paused(&self) -> bool {
        self.autoplay_paused
    }

    /// Advance one slide, wrapping from the last to the first
    pub fn go_to_next(&mut self) -> usize {
        self.current = (self.current + 1) % self.total;
        self.current
    }

    /// Go back one slide, wrapping from the first to the last
    pub fn go_to_prev(&mut self) -> usize {
        self.current = (self.current + self.total - 1) % self.total;
        self.current
    }

    /// Jump to `index`, clamped into range
    pub fn go_to_slide(&mut self, index: i64) -> usize {
        let last = (self.total - 1) as i64;
        self.current = index.clamp(0, last) as usize;
        self.current
    }

    /// Jump to the first slide
    pub fn go_to_first(&mut self) -> usize {
        self.current = 0;
        self.current
    }

    /// Jump to the last slide
    pub fn go_to_last(&mut self) -> usize {
        self.current = self.total - 1;
        self.current
    }

    /// Pause autoplay (idempotent)
    #[inline]
    pub fn pause_autoplay(&mut self) {
        self.autoplay_paused = true;
    }

    /// Resume autoplay (idempotent)
    #[inline]
    pub fn resume_autoplay(&mut self) {
        self.autoplay_paused = false;
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay_paused = !self.autoplay_paused;
        self.autoplay_paused
    }

    /// Apply a navigation command, returning the new index
    pub fn apply(&mut self, command: SlideCommand) -> usize {
        match command {
            SlideCommand::Next => self.go_to_next(),
            SlideCommand::Previous => self.go_to_prev(),
            SlideCommand::First => self.go_to_first(),
            SlideCommand::Last => self.go_to_last(),
            SlideCommand::GoTo(index) => self.go_to_slide(index),
        }
    }
}
