//! Contact controller: form state plus `fetch` submission

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use clinic_leads::{Field, HospitalInquiry, Inquiry, PatientInquiry};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::timer::Deadline;
use super::{date_now, log, notify, window};
use crate::contact::{ContactForm, SubmitError};

/// Either of the two inquiry forms
enum AnyForm {
    Patient(ContactForm<PatientInquiry>),
    Hospital(ContactForm<HospitalInquiry>),
}

/// Dispatch a call to whichever form is inside
macro_rules! with_form {
    ($form:expr, $f:ident => $body:expr) => {
        match $form {
            AnyForm::Patient($f) => $body,
            AnyForm::Hospital($f) => $body,
        }
    };
}

struct ContactState {
    form: AnyForm,
    on_change: Option<js_sys::Function>,
    expiry_timer: Deadline,
}

type Shared = Rc<RefCell<ContactState>>;

/// Contact form controller for WASM
#[wasm_bindgen]
pub struct ContactController {
    state: Shared,
}

#[wasm_bindgen]
impl ContactController {
    /// Create a controller for `"patient"` or `"hospital"`
    #[wasm_bindgen(constructor)]
    pub fn new(kind: &str) -> Result<ContactController, JsValue> {
        let form = match kind {
            "patient" => AnyForm::Patient(ContactForm::new()),
            "hospital" => AnyForm::Hospital(ContactForm::new()),
            other => return Err(JsValue::from_str(&format!("unknown form: {}", other))),
        };
        Ok(Self {
            state: Rc::new(RefCell::new(ContactState {
                form,
                on_change: None,
                expiry_timer: Deadline::default(),
            })),
        })
    }

    /// Register a callback receiving the form view JSON after every change
    #[wasm_bindgen]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.state.borrow_mut().on_change = Some(callback);
    }

    /// Edit a field by its camelCase name
    #[wasm_bindgen]
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let Some(field) = Field::from_name(name) else {
            return false;
        };
        let changed = with_form!(&mut self.state.borrow_mut().form, f => f.set_field(field, value));
        after_change(&self.state);
        changed
    }

    /// Validate a field on blur; returns its error message, if any
    #[wasm_bindgen]
    pub fn blur(&mut self, name: &str) -> Option<String> {
        let field = Field::from_name(name)?;
        let now = date_now();
        let error = with_form!(&mut self.state.borrow_mut().form, f => f.blur(field, now));
        after_change(&self.state);
        error.map(|e| e.to_string())
    }

    /// Validate and post the form
    ///
    /// Resolves to `true` when stored, `false` when validation or the
    /// endpoint rejected it. Nothing is sent for an invalid form.
    #[wasm_bindgen]
    pub fn submit(&self) -> js_sys::Promise {
        let now = date_now();
        let prepared = {
            let mut state = self.state.borrow_mut();
            match &mut state.form {
                AnyForm::Patient(f) => prepare(f, now),
                AnyForm::Hospital(f) => prepare(f, now),
            }
        };
        after_change(&self.state);

        let weak = Rc::downgrade(&self.state);
        future_to_promise(async move {
            let (endpoint, body) = match prepared {
                Ok(request) => request,
                Err(e) => {
                    log(&format!("[clinic-ui] submit blocked: {}", e));
                    return Ok(JsValue::FALSE);
                }
            };

            let result = post_json(endpoint, &body).await;
            if let Err(message) = &result {
                log(&format!("[clinic-ui] submit failed: {}", message));
            }
            let stored = result.is_ok();
            finish(&weak, result);
            Ok(JsValue::from_bool(stored))
        })
    }

    /// Get the form view as JSON
    #[wasm_bindgen]
    pub fn get_view_json(&self) -> String {
        view_json(&self.state.borrow().form, date_now())
    }
}

impl Drop for ContactController {
    fn drop(&mut self) {
        self.state.borrow_mut().expiry_timer.cancel();
    }
}

fn prepare<I: Inquiry + Serialize>(
    form: &mut ContactForm<I>,
    now_ms: f64,
) -> Result<(&'static str, String), SubmitError> {
    let payload = form.submit(now_ms)?;
    let body = serde_json::to_string(&payload).unwrap_or_else(|_| "{}".to_string());
    Ok((I::ENDPOINT, body))
}

fn view_json(form: &AnyForm, now_ms: f64) -> String {
    with_form!(form, f => serde_json::to_string(&f.view(now_ms)))
        .unwrap_or_else(|_| "{}".to_string())
}

/// POST `body` to `endpoint`; an error carries the endpoint's message
async fn post_json(endpoint: &str, body: &str) -> Result<(), String> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::SameOrigin);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(endpoint, &init).map_err(js_message)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_message)?;

    let window = window().map_err(js_message)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_message)?
        .dyn_into()
        .map_err(js_message)?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let json = match response.json() {
        Ok(promise) => JsFuture::from(promise).await.ok(),
        Err(_) => None,
    };
    let message = json
        .and_then(|body| js_sys::Reflect::get(&body, &JsValue::from_str("error")).ok())
        .and_then(|error| error.as_string())
        .unwrap_or_else(|| format!("request failed with status {}", status));
    Err(message)
}

fn js_message(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

fn finish(weak: &Weak<RefCell<ContactState>>, result: Result<(), String>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let now = date_now();
    with_form!(&mut state.borrow_mut().form, f => f.finish_submit(result, now));
    after_change(&state);
}

/// Point the expiry timer at the next deadline and report the view
fn after_change(state: &Shared) {
    let (callback, json) = {
        let mut guard = state.borrow_mut();
        let ContactState {
            form,
            on_change,
            expiry_timer,
        } = &mut *guard;

        let now = date_now();
        let deadline = with_form!(&*form, f => f.next_deadline());
        let weak = Rc::downgrade(state);
        if let Err(e) = expiry_timer.sync(deadline, now, move || expiry_fired(&weak)) {
            log(&format!("[clinic-ui] expiry timer failed: {:?}", e));
        }
        (on_change.clone(), view_json(form, now))
    };
    notify(callback, json);
}

fn expiry_fired(weak: &Weak<RefCell<ContactState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    {
        let mut guard = state.borrow_mut();
        guard.expiry_timer.cancel();
        let now = date_now();
        with_form!(&mut guard.form, f => f.tick(now));
    }
    after_change(&state);
}
