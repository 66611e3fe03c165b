//! WASM exports for the clinic site
//!
//! Controllers wrap the pure state types and own every browser listener
//! and timer they create. Dropping or detaching a controller releases them.

mod contact;
mod gallery;
mod listener;
mod sections;
mod timer;

use wasm_bindgen::prelude::*;

pub use contact::ContactController;
pub use gallery::GalleryController;
pub use sections::SectionController;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Install the panic hook once the module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Call a JS change callback with a JSON snapshot, logging failures
fn notify(callback: Option<js_sys::Function>, json: String) {
    let Some(callback) = callback else {
        return;
    };
    if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
        log(&format!("[clinic-ui] change callback failed: {:?}", e));
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}
