//! Gallery carousel coordinating navigation, gestures and autoplay
//!
//! This module is split into focused submodules:
//! - `input`: keyboard, pointer and wheel routing

mod input;

use serde::Serialize;

use crate::gesture::{GestureTranslator, WheelGate, DEFAULT_SWIPE_THRESHOLD_PX};
use crate::slider::{
    position_label, AutoplaySchedule, SlideNavigator, SliderError, DEFAULT_AUTOPLAY_INTERVAL_MS,
};

/// Carousel behaviour options
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Advance automatically while not paused
    pub autoplay: bool,
    /// Autoplay interval in milliseconds
    pub interval_ms: u32,
    /// Respond to arrow, A/D, Home and End keys
    pub keyboard: bool,
    /// Drag distance in pixels that counts as a swipe
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            keyboard: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

/// Snapshot handed to the renderer after every change
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselView {
    pub current_index: usize,
    pub total: usize,
    pub label: String,
    pub autoplay_paused: bool,
    pub is_dragging: bool,
    pub drag_offset: f32,
}

/// The gallery component
///
/// Owns the navigator, the gesture translator and the autoplay schedule.
/// The schedule is armed exactly when autoplay is enabled, the navigator is
/// not paused and the carousel is mounted.
#[derive(Clone, Debug)]
pub struct Carousel {
    pub(crate) navigator: SlideNavigator,
    pub(crate) gesture: GestureTranslator,
    pub(crate) autoplay: AutoplaySchedule,
    pub(crate) config: CarouselConfig,
    pub(crate) mounted: bool,
}

impl Carousel {
    /// Create an unmounted carousel over `total` slides
    pub fn new(total: usize, config: CarouselConfig) -> Result<Self, SliderError> {
        Ok(Self {
            navigator: SlideNavigator::new(total)?,
            gesture: GestureTranslator::new(config.swipe_threshold, WheelGate::default()),
            autoplay: AutoplaySchedule::new(config.interval_ms),
            config,
            mounted: false,
        })
    }

    /// Slide navigator
    #[inline]
    pub fn navigator(&self) -> &SlideNavigator {
        &self.navigator
    }

    /// Configuration in effect
    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current slide index
    #[inline]
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    /// Whether the carousel is attached to the page
    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start the autoplay schedule from `now_ms`
    pub fn mount(&mut self, now_ms: f64) {
        self.mounted = true;
        self.sync_autoplay(now_ms);
    }

    /// Stop all timers and drop any gesture in progress
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.autoplay.disarm();
        self.gesture.cancel();
    }

    /// Advance by every autoplay tick due at `now_ms`; returns the number fired
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        let fired = self.autoplay.take_due(now_ms);
        for _ in 0..fired {
            self.navigator.go_to_next();
        }
        fired
    }

    /// Period the host timer should run at, or `None` when autoplay is off
    pub fn autoplay_period(&self) -> Option<u32> {
        self.autoplay
            .is_armed()
            .then(|| self.autoplay.interval_ms() as u32)
    }

    /// Time of the next autoplay tick
    #[inline]
    pub fn next_autoplay_ms(&self) -> Option<f64> {
        self.autoplay.next_due_ms()
    }

    /// Advance one slide
    pub fn next(&mut self) -> usize {
        self.navigator.go_to_next()
    }

    /// Go back one slide
    pub fn prev(&mut self) -> usize {
        self.navigator.go_to_prev()
    }

    /// Jump to a slide (clamped)
    pub fn go_to(&mut self, index: i64) -> usize {
        self.navigator.go_to_slide(index)
    }

    /// Jump to the first slide
    pub fn first(&mut self) -> usize {
        self.navigator.go_to_first()
    }

    /// Jump to the last slide
    pub fn last(&mut self) -> usize {
        self.navigator.go_to_last()
    }

    /// Pause autoplay
    pub fn pause_autoplay(&mut self, now_ms: f64) {
        self.navigator.pause_autoplay();
        self.sync_autoplay(now_ms);
    }

    /// Resume autoplay
    pub fn resume_autoplay(&mut self, now_ms: f64) {
        self.navigator.resume_autoplay();
        self.sync_autoplay(now_ms);
    }

    /// Flip the pause flag, returning whether autoplay is now paused
    pub fn toggle_autoplay(&mut self, now_ms: f64) -> bool {
        let paused = self.navigator.toggle_autoplay();
        self.sync_autoplay(now_ms);
        paused
    }

    /// Enable or disable autoplay entirely
    pub fn set_autoplay_enabled(&mut self, enabled: bool, now_ms: f64) {
        self.config.autoplay = enabled;
        self.sync_autoplay(now_ms);
    }

    /// Change the autoplay interval; a running schedule restarts from `now_ms`
    pub fn set_autoplay_interval(&mut self, interval_ms: u32, now_ms: f64) {
        self.config.interval_ms = interval_ms;
        self.autoplay.set_interval(interval_ms, now_ms);
    }

    /// Current state for the renderer
    pub fn view(&self) -> CarouselView {
        let current_index = self.navigator.current_index();
        let total = self.navigator.total();
        CarouselView {
            current_index,
            total,
            label: position_label(current_index, total),
            autoplay_paused: self.navigator.is_autoplay_paused(),
            is_dragging: self.gesture.is_dragging(),
            drag_offset: self.gesture.drag().offset(),
        }
    }

    pub(crate) fn sync_autoplay(&mut self, now_ms: f64) {
        let should_run =
            self.mounted && self.config.autoplay && !self.navigator.is_autoplay_paused();
        self.autoplay.sync(should_run, now_ms);
    }
}
