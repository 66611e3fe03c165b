//! Wheel debouncing

use super::{Direction, DEFAULT_WHEEL_DEADZONE_PX, DEFAULT_WHEEL_QUIET_MS};

/// Lets one navigation through per physical wheel gesture
///
/// The first event beyond the deadzone fires and latches the gate. Every
/// later event while latched is swallowed and keeps the latch alive, so
/// trackpad inertia cannot fire again. The latch releases once no wheel
/// event has arrived for `quiet_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelGate {
    deadzone_px: f32,
    quiet_ms: f64,
    last_event_ms: Option<f64>,
    latched: bool,
}

impl Default for WheelGate {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_DEADZONE_PX, DEFAULT_WHEEL_QUIET_MS)
    }
}

impl WheelGate {
    /// Create a gate with the given deadzone and quiet period
    pub fn new(deadzone_px: f32, quiet_ms: f64) -> Self {
        Self {
            deadzone_px: deadzone_px.max(0.0),
            quiet_ms: quiet_ms.max(0.0),
            last_event_ms: None,
            latched: false,
        }
    }

    /// Whether a gesture is currently latched at `now_ms`
    pub fn is_latched(&self, now_ms: f64) -> bool {
        self.latched
            && self
                .last_event_ms
                .map(|t| now_ms - t < self.quiet_ms)
                .unwrap_or(false)
    }

    /// Feed one wheel event; returns a direction if it should navigate
    ///
    /// The dominant axis decides; positive deltas mean next.
    pub fn feed(&mut self, delta_x: f32, delta_y: f32, now_ms: f64) -> Option<Direction> {
        let latched = self.is_latched(now_ms);
        self.last_event_ms = Some(now_ms);
        if latched {
            return None;
        }
        self.latched = false;

        let delta = if delta_x.abs() > delta_y.abs() {
            delta_x
        } else {
            delta_y
        };
        if delta.abs() < self.deadzone_px {
            return None;
        }

        self.latched = true;
        Some(if delta > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        })
    }

    /// Forget any latched gesture
    pub fn reset(&mut self) {
        self.last_event_ms = None;
        self.latched = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_convention() {
        let mut gate = WheelGate::default();
        assert_eq!(gate.feed(0.0, 40.0, 0.0), Some(Direction::Next));

        let mut gate = WheelGate::default();
        assert_eq!(gate.feed(-40.0, 0.0, 0.0), Some(Direction::Previous));
    }

    #[test]
    fn test_deadzone() {
        let mut gate = WheelGate::default();
        assert_eq!(gate.feed(3.0, -4.0, 0.0), None);
        assert!(!gate.is_latched(0.0));
    }

    #[test]
    fn test_dominant_axis_wins() {
        let mut gate = WheelGate::default();
        assert_eq!(gate.feed(-60.0, 20.0, 0.0), Some(Direction::Previous));
    }

    #[test]
    fn test_burst_fires_once() {
        let mut gate = WheelGate::new(10.0, 250.0);
        let fired = (0..40)
            .filter_map(|i| gate.feed(0.0, 30.0, f64::from(i) * 16.0))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_inertia_tail_keeps_latch() {
        let mut gate = WheelGate::new(10.0, 250.0);
        assert!(gate.feed(0.0, 80.0, 0.0).is_some());
        // small decaying deltas keep arriving every 100ms
        assert!(gate.feed(0.0, 2.0, 100.0).is_none());
        assert!(gate.feed(0.0, 40.0, 200.0).is_none());
        assert!(gate.feed(0.0, 40.0, 400.0).is_none());
        assert!(gate.is_latched(500.0));
    }

    #[test]
    fn test_new_gesture_after_quiet_period() {
        let mut gate = WheelGate::new(10.0, 250.0);
        assert_eq!(gate.feed(0.0, 30.0, 0.0), Some(Direction::Next));
        assert_eq!(gate.feed(0.0, 30.0, 100.0), None);
        assert_eq!(gate.feed(0.0, -30.0, 400.0), Some(Direction::Previous));
    }

    #[test]
    fn test_reset_releases_latch() {
        let mut gate = WheelGate::default();
        gate.feed(0.0, 30.0, 0.0);
        gate.reset();
        assert_eq!(gate.feed(0.0, 30.0, 10.0), Some(Direction::Next));
    }
}
