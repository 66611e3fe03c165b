//! Gallery controller: carousel wired to mouse, touch, wheel and keys

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

use super::listener::EventSubscription;
use super::timer::Deadline;
use super::{date_now, log, notify, window};
use crate::carousel::{Carousel, CarouselConfig};
use crate::slider::{card_pose, slide_stride, track_offset};

struct GalleryState {
    carousel: Carousel,
    on_change: Option<js_sys::Function>,
    autoplay_timer: Deadline,
}

type Shared = Rc<RefCell<GalleryState>>;

/// Gallery controller for WASM
#[wasm_bindgen]
pub struct GalleryController {
    state: Shared,
    subscriptions: Vec<EventSubscription>,
}

#[wasm_bindgen]
impl GalleryController {
    /// Create a controller over `total` slides
    #[wasm_bindgen(constructor)]
    pub fn new(
        total: usize,
        autoplay: bool,
        interval_ms: u32,
        keyboard: bool,
    ) -> Result<GalleryController, JsValue> {
        let config = CarouselConfig {
            autoplay,
            interval_ms,
            keyboard,
            ..Default::default()
        };
        let carousel =
            Carousel::new(total, config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            state: Rc::new(RefCell::new(GalleryState {
                carousel,
                on_change: None,
                autoplay_timer: Deadline::default(),
            })),
            subscriptions: Vec::new(),
        })
    }

    /// Register a callback receiving the view JSON after every change
    #[wasm_bindgen]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.state.borrow_mut().on_change = Some(callback);
    }

    /// Attach listeners to the gallery track and start autoplay
    #[wasm_bindgen]
    pub fn attach(&mut self, track: &HtmlElement) -> Result<(), JsValue> {
        self.detach();

        let weak = Rc::downgrade(&self.state);
        let keyboard = self.state.borrow().carousel.config().keyboard;

        self.subscriptions.push(EventSubscription::new(track, "mousedown", {
            let weak = weak.clone();
            move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let x = event.client_x() as f32;
                    with_state(&weak, |c| {
                        c.handle_pointer_down(x, date_now());
                    });
                }
            }
        })?);
        self.subscriptions.push(EventSubscription::new(track, "mousemove", {
            let weak = weak.clone();
            move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let x = event.client_x() as f32;
                    with_state(&weak, |c| {
                        c.handle_pointer_move(x);
                    });
                }
            }
        })?);
        self.subscriptions.push(EventSubscription::new(track, "touchstart", {
            let weak = weak.clone();
            move |event: Event| {
                if let Some(x) = first_touch_x(&event) {
                    with_state(&weak, |c| {
                        c.handle_pointer_down(x, date_now());
                    });
                }
            }
        })?);
        self.subscriptions.push(EventSubscription::new(track, "touchmove", {
            let weak = weak.clone();
            move |event: Event| {
                if let Some(x) = first_touch_x(&event) {
                    with_state(&weak, |c| {
                        c.handle_pointer_move(x);
                    });
                }
            }
        })?);
        for name in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
            self.subscriptions.push(EventSubscription::new(track, name, {
                let weak = weak.clone();
                move |_event: Event| {
                    with_state(&weak, |c| {
                        c.handle_pointer_up(date_now());
                    });
                }
            })?);
        }
        self.subscriptions.push(EventSubscription::active(track, "wheel", {
            let weak = weak.clone();
            move |event: Event| {
                if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                    let (dx, dy) = (wheel.delta_x() as f32, wheel.delta_y() as f32);
                    event.prevent_default();
                    with_state(&weak, |c| {
                        c.handle_wheel(dx, dy, date_now());
                    });
                }
            }
        })?);

        if keyboard {
            self.subscriptions.push(EventSubscription::new(&window()?, "keydown", {
                let weak = weak.clone();
                move |event: Event| {
                    if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) {
                        with_state(&weak, |c| {
                            c.handle_key(&key);
                        });
                    }
                }
            })?);
        }

        self.state.borrow_mut().carousel.mount(date_now());
        after_change(&self.state);
        Ok(())
    }

    /// Remove every listener and stop autoplay
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        self.subscriptions.clear();
        let mut state = self.state.borrow_mut();
        state.carousel.unmount();
        state.autoplay_timer.cancel();
    }

    #[wasm_bindgen]
    pub fn next(&mut self) -> usize {
        self.update(|c| c.next())
    }

    #[wasm_bindgen]
    pub fn prev(&mut self) -> usize {
        self.update(|c| c.prev())
    }

    /// Jump to a slide (clamped)
    #[wasm_bindgen]
    pub fn go_to(&mut self, index: i32) -> usize {
        self.update(|c| c.go_to(i64::from(index)))
    }

    #[wasm_bindgen]
    pub fn first(&mut self) -> usize {
        self.update(|c| c.first())
    }

    #[wasm_bindgen]
    pub fn last(&mut self) -> usize {
        self.update(|c| c.last())
    }

    #[wasm_bindgen]
    pub fn pause_autoplay(&mut self) {
        self.update(|c| c.pause_autoplay(date_now()));
    }

    #[wasm_bindgen]
    pub fn resume_autoplay(&mut self) {
        self.update(|c| c.resume_autoplay(date_now()));
    }

    /// Flip autoplay; returns true when now paused
    #[wasm_bindgen]
    pub fn toggle_autoplay(&mut self) -> bool {
        self.update(|c| c.toggle_autoplay(date_now()))
    }

    #[wasm_bindgen]
    pub fn set_autoplay_interval(&mut self, interval_ms: u32) {
        self.update(|c| c.set_autoplay_interval(interval_ms, date_now()));
    }

    #[wasm_bindgen]
    pub fn current_index(&self) -> usize {
        self.state.borrow().carousel.current_index()
    }

    /// Get the view as JSON
    #[wasm_bindgen]
    pub fn get_view_json(&self) -> String {
        view_json(&self.state.borrow().carousel)
    }

    /// X translation of the track for a viewport width
    #[wasm_bindgen]
    pub fn track_offset(&self, viewport_width: f32) -> f32 {
        let state = self.state.borrow();
        let view = state.carousel.view();
        track_offset(view.current_index, slide_stride(viewport_width), view.drag_offset)
    }

    /// Get the pose of one card as JSON
    #[wasm_bindgen]
    pub fn get_card_pose_json(&self, index: usize) -> String {
        let state = self.state.borrow();
        let view = state.carousel.view();
        serde_json::to_string(&card_pose(index, view.current_index, view.drag_offset))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

impl GalleryController {
    fn update<R>(&mut self, f: impl FnOnce(&mut Carousel) -> R) -> R {
        let result = f(&mut self.state.borrow_mut().carousel);
        after_change(&self.state);
        result
    }
}

impl Drop for GalleryController {
    fn drop(&mut self) {
        self.detach();
    }
}

fn view_json(carousel: &Carousel) -> String {
    serde_json::to_string(&carousel.view()).unwrap_or_else(|_| "{}".to_string())
}

fn first_touch_x(event: &Event) -> Option<f32> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().item(0)?;
    Some(touch.client_x() as f32)
}

/// Run `f` against live state, then resync timers and notify
fn with_state(weak: &Weak<RefCell<GalleryState>>, f: impl FnOnce(&mut Carousel)) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    f(&mut state.borrow_mut().carousel);
    after_change(&state);
}

/// Point the autoplay timer at the next due tick and report the view
///
/// The callback runs after the state borrow is released so it may call
/// back into the controller.
fn after_change(state: &Shared) {
    let (callback, json) = {
        let mut guard = state.borrow_mut();
        let GalleryState {
            carousel,
            on_change,
            autoplay_timer,
        } = &mut *guard;

        let weak = Rc::downgrade(state);
        let synced = autoplay_timer.sync(carousel.next_autoplay_ms(), date_now(), move || {
            autoplay_fired(&weak)
        });
        if let Err(e) = synced {
            log(&format!("[clinic-ui] autoplay timer failed: {:?}", e));
        }
        (on_change.clone(), view_json(carousel))
    };
    notify(callback, json);
}

fn autoplay_fired(weak: &Weak<RefCell<GalleryState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    {
        let mut guard = state.borrow_mut();
        guard.autoplay_timer.cancel();
        guard.carousel.tick(date_now());
    }
    after_change(&state);
}
