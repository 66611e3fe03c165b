//! Section controller: tracker wired to an IntersectionObserver

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use super::listener::EventSubscription;
use super::{notify, window};
use crate::sections::{SectionTracker, Span, NAVIGATION_ITEMS};

struct SectionState {
    tracker: SectionTracker,
    container: HtmlElement,
    elements: Vec<HtmlElement>,
    on_change: Option<js_sys::Function>,
}

impl SectionState {
    fn remeasure(&mut self) {
        for (index, element) in self.elements.iter().enumerate() {
            self.tracker.update_span(index, span_of(&self.container, element));
        }
    }
}

/// Section controller for WASM
#[wasm_bindgen]
pub struct SectionController {
    state: Rc<RefCell<SectionState>>,
    observer: Option<IntersectionObserver>,
    _observer_callback: Option<Closure<dyn FnMut(js_sys::Array)>>,
    subscriptions: Vec<EventSubscription>,
}

#[wasm_bindgen]
impl SectionController {
    /// Create a controller for a scroll container
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement) -> SectionController {
        Self {
            state: Rc::new(RefCell::new(SectionState {
                tracker: SectionTracker::new(),
                container,
                elements: Vec::new(),
                on_change: None,
            })),
            observer: None,
            _observer_callback: None,
            subscriptions: Vec::new(),
        }
    }

    /// Register a callback receiving the current section index
    #[wasm_bindgen]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.state.borrow_mut().on_change = Some(callback);
    }

    /// Register the next section element, returning its index
    #[wasm_bindgen]
    pub fn register_section(&mut self, element: HtmlElement) -> usize {
        if let Some(observer) = &self.observer {
            observer.observe(&element);
        }
        let mut state = self.state.borrow_mut();
        let span = span_of(&state.container, &element);
        let index = state.tracker.register(span);
        state.elements.push(element);
        index
    }

    /// Start observing sections, scroll and resize
    #[wasm_bindgen]
    pub fn attach(&mut self) -> Result<(), JsValue> {
        self.detach();

        let weak = Rc::downgrade(&self.state);
        let (container, root_margin) = {
            let state = self.state.borrow();
            (state.container.clone(), state.tracker.band().root_margin())
        };

        let callback = Closure::wrap(Box::new({
            let weak = weak.clone();
            move |entries: js_sys::Array| on_entries(&weak, &entries)
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        let root: &Element = &container;
        options.set_root(Some(root));
        options.set_root_margin(&root_margin);
        options.set_threshold(&JsValue::from_f64(0.0));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for element in &self.state.borrow().elements {
            observer.observe(element);
        }

        self.subscriptions.push(EventSubscription::new(&container, "scroll", {
            let weak = weak.clone();
            move |_event: Event| {
                update(&weak, |state| {
                    let scroll_top = state.container.scroll_top() as f32;
                    state.tracker.on_scroll(scroll_top)
                })
            }
        })?);
        self.subscriptions.push(EventSubscription::new(&window()?, "resize", {
            let weak = weak.clone();
            move |_event: Event| {
                update(&weak, |state| {
                    state.remeasure();
                    let scroll_top = state.container.scroll_top() as f32;
                    let height = state.container.client_height() as f32;
                    state.tracker.measure(scroll_top, height)
                })
            }
        })?);

        self.observer = Some(observer);
        self._observer_callback = Some(callback);
        Ok(())
    }

    /// Disconnect the observer and remove listeners
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self._observer_callback = None;
        self.subscriptions.clear();
    }

    /// Smooth-scroll the container to a section (index clamped)
    ///
    /// The current section is not changed here; it follows the scroll.
    #[wasm_bindgen]
    pub fn scroll_to_section(&self, index: i32) {
        let state = self.state.borrow();
        let Some(target) = state.tracker.scroll_target(i64::from(index)) else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(f64::from(target.top));
        options.set_behavior(ScrollBehavior::Smooth);
        state.container.scroll_to_with_scroll_to_options(&options);
    }

    #[wasm_bindgen]
    pub fn current_section(&self) -> usize {
        self.state.borrow().tracker.current_section()
    }

    /// Top of a section in the container's scroll coordinates
    #[wasm_bindgen]
    pub fn section_top(&self, index: usize) -> Option<f32> {
        self.state.borrow().tracker.span(index).map(|span| span.top)
    }

    #[wasm_bindgen]
    pub fn is_active(&self, index: usize) -> bool {
        self.state.borrow().tracker.is_active(index)
    }

    /// Get the navigation items as JSON
    #[wasm_bindgen]
    pub fn get_navigation_json(&self) -> String {
        serde_json::to_string(&NAVIGATION_ITEMS).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Drop for SectionController {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Span of `element` in the container's scroll coordinates
fn span_of(container: &HtmlElement, element: &HtmlElement) -> Span {
    let rect = element.get_bounding_client_rect();
    let origin = container.get_bounding_client_rect().top() - f64::from(container.scroll_top());
    Span::new((rect.top() - origin) as f32, rect.height() as f32)
}

fn on_entries(weak: &Weak<RefCell<SectionState>>, entries: &js_sys::Array) {
    update(weak, |state| {
        let changes: Vec<(usize, bool)> = entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let target: Element = entry.target();
                state
                    .elements
                    .iter()
                    .position(|e| AsRef::<Element>::as_ref(e) == &target)
                    .map(|index| (index, entry.is_intersecting()))
            })
            .collect();
        let scroll_top = state.container.scroll_top() as f32;
        state.tracker.on_intersection(&changes, scroll_top)
    });
}

/// Apply `f` to live state and notify when the current section changed
fn update(weak: &Weak<RefCell<SectionState>>, f: impl FnOnce(&mut SectionState) -> bool) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let (callback, current) = {
        let mut guard = state.borrow_mut();
        if !f(&mut guard) {
            return;
        }
        (guard.on_change.clone(), guard.tracker.current_section())
    };
    notify(callback, current.to_string());
}
