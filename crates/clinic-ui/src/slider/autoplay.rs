//! Autoplay as a cancellable scheduled task

/// Fires at a fixed interval while armed
///
/// Time is injected as `now_ms` so the schedule can be driven by a browser
/// timer or by tests. Disarming cancels the pending tick; re-arming starts a
/// full interval from the given time.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoplaySchedule {
    interval_ms: f64,
    next_due_ms: Option<f64>,
}

impl AutoplaySchedule {
    /// Create a disarmed schedule
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms.max(1)),
            next_due_ms: None,
        }
    }

    /// Interval between ticks
    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Whether a tick is pending
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Time of the next tick, if armed
    #[inline]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.next_due_ms
    }

    /// Start (or restart) the interval from `now_ms`
    pub fn arm(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms + self.interval_ms);
    }

    /// Cancel any pending tick
    pub fn disarm(&mut self) {
        self.next_due_ms = None;
    }

    /// Arm or disarm to match `should_run`; an armed schedule keeps its phase
    pub fn sync(&mut self, should_run: bool, now_ms: f64) {
        match (should_run, self.is_armed()) {
            (true, false) => self.arm(now_ms),
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    /// Change the interval, re-arming from `now_ms` if currently armed
    pub fn set_interval(&mut self, interval_ms: u32, now_ms: f64) {
        self.interval_ms = f64::from(interval_ms.max(1));
        if self.is_armed() {
            self.arm(now_ms);
        }
    }

    /// Number of ticks due at `now_ms`, consuming them
    ///
    /// A late poll reports every interval that elapsed since the last one.
    pub fn take_due(&mut self, now_ms: f64) -> u32 {
        let Some(due) = self.next_due_ms else {
            return 0;
        };
        if now_ms < due {
            return 0;
        }
        let fired = ((now_ms - due) / self.interval_ms).floor() as u32 + 1;
        self.next_due_ms = Some(due + f64::from(fired) * self.interval_ms);
        fired
    }
}
