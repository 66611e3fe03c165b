//! Browser tests for the WASM controllers
//!
//! Run with `wasm-pack test --headless --chrome -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use clinic_ui::{ContactController, GalleryController, SectionController};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_gallery_controller_wraps() {
    let mut gallery = GalleryController::new(3, false, 5000, true).unwrap();
    assert_eq!(gallery.prev(), 2);
    assert_eq!(gallery.next(), 0);
    assert_eq!(gallery.go_to(9), 2);
}

#[wasm_bindgen_test]
fn test_gallery_rejects_empty_set() {
    assert!(GalleryController::new(0, true, 5000, true).is_err());
}

#[wasm_bindgen_test]
fn test_contact_blur_reports_message() {
    let mut form = ContactController::new("hospital").unwrap();
    assert_eq!(form.blur("city").as_deref(), Some("City is required"));
    assert!(form.set_field("city", "Hisar"));
    assert!(form.get_view_json().contains("\"city\":\"Hisar\""));
}

fn element(style: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    element.set_attribute("style", style).unwrap();
    element
}

fn mouse(target: &HtmlElement, kind: &str, x: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn test_mouse_swipe_on_track_moves_one_slide() {
    let track = element("width:800px;height:200px");
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.append_child(&track).unwrap();

    let mut gallery = GalleryController::new(5, false, 5000, true).unwrap();
    gallery.attach(&track).unwrap();

    mouse(&track, "mousedown", 400);
    mouse(&track, "mousemove", 300);
    mouse(&track, "mouseup", 300);
    mouse(&track, "mouseleave", 300);
    assert_eq!(gallery.current_index(), 1);

    mouse(&track, "mousedown", 100);
    mouse(&track, "mousemove", 180);
    mouse(&track, "mouseleave", 180);
    assert_eq!(gallery.current_index(), 0);

    gallery.detach();
    track.remove();
}

#[wasm_bindgen_test]
fn test_pointer_events_do_not_drive_the_track() {
    let track = element("width:800px;height:200px");
    let mut gallery = GalleryController::new(5, false, 5000, true).unwrap();
    gallery.attach(&track).unwrap();

    mouse(&track, "pointerdown", 400);
    mouse(&track, "pointermove", 200);
    mouse(&track, "pointerup", 200);
    assert_eq!(gallery.current_index(), 0);
    assert!(gallery.get_view_json().contains("\"isDragging\":false"));
}

#[wasm_bindgen_test]
fn test_section_tops_are_relative_to_container() {
    let container = element("margin-top:200px;height:400px;overflow-y:scroll");
    let first = element("height:300px;margin:0");
    let second = element("height:300px;margin:0");
    container.append_child(&first).unwrap();
    container.append_child(&second).unwrap();
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.append_child(&container).unwrap();
    container.set_scroll_top(100);

    let mut sections = SectionController::new(container.clone());
    assert_eq!(sections.register_section(first), 0);
    assert_eq!(sections.register_section(second), 1);

    assert!(sections.section_top(0).unwrap().abs() < 0.5);
    assert!((sections.section_top(1).unwrap() - 300.0).abs() < 0.5);
    assert_eq!(sections.section_top(2), None);

    container.remove();
}
