use crate::core::OrbitCamera;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub drag: Rc<RefCell<input::OrbitDrag>>,
}

/// Drag to orbit, right-drag to pan, wheel to zoom.
pub fn wire_orbit_controls(w: OrbitWiring) {
    wire_pointerdown(&w);
    wire_contextmenu(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let modifier = ev.ctrl_key() || ev.meta_key() || ev.shift_key();
        let Some(mode) = input::DragMode::from_button(ev.button(), modifier) else {
            return;
        };
        let (x, y) = input::pointer_canvas_px(&ev, &w.canvas);
        w.drag.borrow_mut().begin(ev.pointer_id(), mode, x, y);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Right-drag pans, so the browser menu stays closed over the canvas
fn wire_contextmenu(w: &OrbitWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = input::pointer_canvas_px(&ev, &w.canvas);
        let (mode, moved) = {
            let mut drag = w.drag.borrow_mut();
            if drag.pointer_id != ev.pointer_id() {
                return;
            }
            (drag.mode, drag.update(x, y))
        };
        if let Some((dx, dy)) = moved {
            let h = w.canvas.height() as f32;
            let mut orbit = w.orbit.borrow_mut();
            match mode {
                input::DragMode::Rotate => orbit.rotate(dx, dy, h),
                input::DragMode::Pan => orbit.pan(dx, dy, h),
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &OrbitWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut drag = w.drag.borrow_mut();
        if drag.active && drag.pointer_id == ev.pointer_id() {
            drag.end();
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        for name in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.orbit.borrow_mut().zoom(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
