//! One-shot browser timers cancelled on drop

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A pending `setTimeout`
pub(crate) struct Timeout {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Run `callback` after `delay_ms` (negative delays run as soon as possible)
    pub fn new<F>(delay_ms: f64, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = super::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.max(0.0).ceil() as i32,
        )?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

/// A timeout that follows a moving deadline
///
/// Re-arming with the same deadline keeps the pending timer.
#[derive(Default)]
pub(crate) struct Deadline {
    due_ms: Option<f64>,
    timeout: Option<Timeout>,
}

impl Deadline {
    /// Point the timer at `due_ms`, or cancel it with `None`
    pub fn sync<F>(&mut self, due_ms: Option<f64>, now_ms: f64, callback: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        if due_ms == self.due_ms && (due_ms.is_none() || self.timeout.is_some()) {
            return Ok(());
        }
        self.timeout = None;
        self.due_ms = due_ms;
        if let Some(due) = due_ms {
            self.timeout = Some(Timeout::new(due - now_ms, callback)?);
        }
        Ok(())
    }

    /// Cancel the pending timer, or forget it once it has fired
    pub fn cancel(&mut self) {
        self.due_ms = None;
        self.timeout = None;
    }
}
