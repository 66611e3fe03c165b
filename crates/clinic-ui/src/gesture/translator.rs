//! Pointer, touch and wheel input to navigation commands

use serde::Serialize;

use super::{Direction, DragState, GestureSink, WheelGate, DEFAULT_SWIPE_THRESHOLD_PX};

/// Result of feeding one input event to the translator
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureResult {
    /// Event had no effect
    Ignored,
    /// Drag started or moved; offset is for visual feedback only
    Dragging { offset: f32 },
    /// Drag ended without reaching the swipe threshold
    SnappedBack,
    /// A navigation command was delivered to the sink
    Navigated { direction: Direction },
}

impl GestureResult {
    /// Check if the event triggered navigation
    #[inline]
    pub fn is_navigation(&self) -> bool {
        matches!(self, GestureResult::Navigated { .. })
    }
}

/// Gesture state machine for the gallery
#[derive(Clone, Debug)]
pub struct GestureTranslator {
    drag: DragState,
    wheel: WheelGate,
    swipe_threshold: f32,
}

impl Default for GestureTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX, WheelGate::default())
    }
}

impl GestureTranslator {
    /// Create a translator with a swipe threshold and wheel gate
    pub fn new(swipe_threshold: f32, wheel: WheelGate) -> Self {
        Self {
            drag: DragState::new(),
            wheel,
            swipe_threshold: swipe_threshold.abs(),
        }
    }

    /// Current drag state
    #[inline]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Swipe threshold in pixels
    #[inline]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// Pointer down / touch start
    pub fn pointer_down(&mut self, x: f32, sink: &mut impl GestureSink) -> GestureResult {
        self.drag.begin(x);
        sink.drag_started();
        GestureResult::Dragging { offset: 0.0 }
    }

    /// Pointer move / touch move
    pub fn pointer_move(&mut self, x: f32) -> GestureResult {
        match self.drag.track(x) {
            Some(offset) => GestureResult::Dragging { offset },
            None => GestureResult::Ignored,
        }
    }

    /// Pointer up / touch end / pointer leave
    ///
    /// Ending a drag always resets the drag state and notifies the sink,
    /// whether or not the offset reached the threshold.
    pub fn pointer_up(&mut self, sink: &mut impl GestureSink) -> GestureResult {
        let Some(offset) = self.drag.finish() else {
            return GestureResult::Ignored;
        };

        let direction = self.classify_swipe(offset);
        if let Some(direction) = direction {
            sink.navigate(direction);
        }
        sink.drag_ended();

        match direction {
            Some(direction) => GestureResult::Navigated { direction },
            None => GestureResult::SnappedBack,
        }
    }

    /// Wheel event with the raw deltas
    pub fn wheel(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        now_ms: f64,
        sink: &mut impl GestureSink,
    ) -> GestureResult {
        match self.wheel.feed(delta_x, delta_y, now_ms) {
            Some(direction) => {
                sink.navigate(direction);
                GestureResult::Navigated { direction }
            }
            None => GestureResult::Ignored,
        }
    }

    /// Drop any gesture in progress without notifying anyone
    pub fn cancel(&mut self) {
        self.drag = DragState::new();
        self.wheel.reset();
    }

    /// Dragging left past the threshold means next, right means previous
    fn classify_swipe(&self, offset: f32) -> Option<Direction> {
        if offset <= -self.swipe_threshold {
            Some(Direction::Next)
        } else if offset >= self.swipe_threshold {
            Some(Direction::Previous)
        } else {
            None
        }
    }
}
