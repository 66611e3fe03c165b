//! Keyboard, pointer and wheel routing

use crate::gesture::{Direction, GestureResult, GestureSink};
use crate::slider::{command_for_key, SlideNavigator};

use super::Carousel;

/// Applies translated gestures to the navigator
struct NavigatorSink<'a> {
    navigator: &'a mut SlideNavigator,
}

impl GestureSink for NavigatorSink<'_> {
    fn drag_started(&mut self) {
        self.navigator.pause_autoplay();
    }

    fn drag_ended(&mut self) {
        self.navigator.resume_autoplay();
    }

    fn navigate(&mut self, direction: Direction) {
        match direction {
            Direction::Next => self.navigator.go_to_next(),
            Direction::Previous => self.navigator.go_to_prev(),
        };
    }
}

impl Carousel {
    /// Handle a `KeyboardEvent.key`; returns the new index if the key was used
    pub fn handle_key(&mut self, key: &str) -> Option<usize> {
        if !self.config.keyboard {
            return None;
        }
        let command = command_for_key(key)?;
        Some(self.navigator.apply(command))
    }

    /// Handle pointer down / touch start
    pub fn handle_pointer_down(&mut self, x: f32, now_ms: f64) -> GestureResult {
        let mut sink = NavigatorSink {
            navigator: &mut self.navigator,
        };
        let result = self.gesture.pointer_down(x, &mut sink);
        self.sync_autoplay(now_ms);
        result
    }

    /// Handle pointer move / touch move
    pub fn handle_pointer_move(&mut self, x: f32) -> GestureResult {
        self.gesture.pointer_move(x)
    }

    /// Handle pointer up, pointer leave or touch end
    pub fn handle_pointer_up(&mut self, now_ms: f64) -> GestureResult {
        let mut sink = NavigatorSink {
            navigator: &mut self.navigator,
        };
        let result = self.gesture.pointer_up(&mut sink);
        self.sync_autoplay(now_ms);
        result
    }

    /// Handle a wheel event
    pub fn handle_wheel(&mut self, delta_x: f32, delta_y: f32, now_ms: f64) -> GestureResult {
        let mut sink = NavigatorSink {
            navigator: &mut self.navigator,
        };
        self.gesture.wheel(delta_x, delta_y, now_ms, &mut sink)
    }
}
