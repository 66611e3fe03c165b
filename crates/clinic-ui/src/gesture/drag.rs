//! Drag state for swipe gestures

/// Horizontal drag in progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// True between drag start and drag end
    pub is_dragging: bool,
    /// Pointer x at drag start
    pub origin_x: f32,
    /// Pointer x minus `origin_x`
    pub current_offset: f32,
}

impl DragState {
    /// Create an idle drag state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `x`, discarding any previous gesture
    pub fn begin(&mut self, x: f32) {
        *self = Self {
            is_dragging: true,
            origin_x: x,
            current_offset: 0.0,
        };
    }

    /// Follow the pointer; returns the new offset while dragging
    pub fn track(&mut self, x: f32) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        self.current_offset = x - self.origin_x;
        Some(self.current_offset)
    }

    /// End the drag, returning its final offset and resetting to idle
    pub fn finish(&mut self) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let offset = self.current_offset;
        *self = Self::default();
        Some(offset)
    }

    /// Offset for visual feedback (zero when idle)
    #[inline]
    pub fn offset(&self) -> f32 {
        if self.is_dragging {
            self.current_offset
        } else {
            0.0
        }
    }
}
